use std::rc::Rc;

use async_trait::async_trait;

use crate::error::FetchError;

/// Issues the GET for one keystroke. Anything but a successful response is an error.
#[async_trait(?Send)]
pub trait QueryTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait(?Send)]
impl<T: QueryTransport + ?Sized> QueryTransport for Rc<T> {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).get_text(url).await
    }
}
