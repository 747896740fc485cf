use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};

use crate::config::ForwarderConfig;
use crate::error::{FetchError, StartupError};
use crate::forwarder::LiveQueryForwarder;
use crate::request::PageOrigin;
use crate::surface::ResultSurface;
use crate::transport::QueryTransport;

const INPUT_ID: &str = "input";
const RESULT_ID: &str = "result";

struct ElementSurface(Element);

impl ResultSurface for ElementSurface {
    fn set_inner_html(&self, markup: &str) {
        self.0.set_inner_html(markup);
    }
}

struct GlooTransport;

#[async_trait(?Send)]
impl QueryTransport for GlooTransport {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = Request::get(url).send().await?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }
        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Err(e) = attach(ForwarderConfig::default()) {
        log::error!("live search disabled: {e}");
    }
}

fn attach(config: ForwarderConfig) -> Result<(), StartupError> {
    let window = web_sys::window().ok_or(StartupError::NoWindow)?;
    let document = window.document().ok_or(StartupError::NoDocument)?;
    let input = document
        .get_element_by_id(INPUT_ID)
        .ok_or(StartupError::MissingElement(INPUT_ID))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| StartupError::NotAnInput(INPUT_ID))?;
    let result = document
        .get_element_by_id(RESULT_ID)
        .ok_or(StartupError::MissingElement(RESULT_ID))?;

    let location = window.location();
    let origin = PageOrigin::new(
        location.hostname().map_err(js_error)?,
        location.port().map_err(js_error)?,
    );
    let forwarder = Rc::new(LiveQueryForwarder::new(
        GlooTransport,
        ElementSurface(result),
        origin,
        config,
    ));
    forwarder.initialize();

    let field = input.clone();
    let on_keyup = Closure::<dyn FnMut(KeyboardEvent)>::new(move |_: KeyboardEvent| {
        let forwarder = forwarder.clone();
        let query = field.value();
        spawn_local(async move {
            forwarder.forward(&query).await;
        });
    });
    input
        .add_event_listener_with_callback("keyup", on_keyup.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // the listener lives as long as the page
    on_keyup.forget();
    Ok(())
}

fn js_error(value: JsValue) -> StartupError {
    StartupError::Js(format!("{value:?}"))
}
