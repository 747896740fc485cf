use std::rc::Rc;

/// The element search responses are written into.
pub trait ResultSurface {
    /// Replaces the element's content. The markup is rendered, not escaped.
    fn set_inner_html(&self, markup: &str);
}

impl<S: ResultSurface + ?Sized> ResultSurface for Rc<S> {
    fn set_inner_html(&self, markup: &str) {
        (**self).set_inner_html(markup)
    }
}
