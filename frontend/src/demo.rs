use post_table_shared::{lazy_add, LazyAddError};
use serde_json::{json, Value};
use wasm_bindgen::JsValue;

use crate::i18n::current::lazy_add_demo as t;

/// Console line for a settled [`lazy_add`] call.
pub fn describe(outcome: &Result<f64, LazyAddError>) -> String {
    match outcome {
        Ok(sum) => format!("{}{}", t::RESOLVED_PREFIX, sum),
        Err(reason) => format!("{}{}", t::REJECTED_PREFIX, reason),
    }
}

fn demo_inputs() -> [(Value, Value); 2] {
    [(json!(3), json!(4)), (json!("nan"), json!("alsonan"))]
}

/// Await each sample addition and log how it settled.
pub fn spawn_lazy_add_demo() {
    wasm_bindgen_futures::spawn_local(async {
        for (a, b) in demo_inputs() {
            let line = describe(&lazy_add(a, b).await);
            web_sys::console::log_1(&JsValue::from_str(&line));
        }
    });
}
