//! WASM build test
//!
//! Exercises the JavaScript-facing exports inside a browser.
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use taiko_complexity_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_module_start() {
    taiko_complexity_wasm::main();
    let report = score_input("ox");
    assert_eq!(report.note_count, 2);
}

#[wasm_bindgen_test]
fn test_preview_pattern_classes() {
    let tokens = preview_pattern("o x ?");
    assert_eq!(tokens.length(), 3);
    assert_eq!(tokens.get(0).as_string().as_deref(), Some("don"));
    assert_eq!(tokens.get(1).as_string().as_deref(), Some("ka"));
    assert_eq!(tokens.get(2).as_string().as_deref(), Some("unknown"));
}

#[wasm_bindgen_test]
fn test_reference_patterns() {
    let value = reference_patterns().expect("reference table should serialize");
    let array = js_sys::Array::from(&value);
    assert_eq!(array.length(), 5);

    let first = js_sys::Reflect::get(&array.get(0), &JsValue::from_str("pattern"))
        .expect("pattern field");
    assert_eq!(first.as_string().as_deref(), Some("oooooooooooooooo"));
}

#[wasm_bindgen_test]
fn test_breakdown_json() {
    let json = score_breakdown_json("oxxo").expect("breakdown should serialize");
    assert!(json.contains("\"noteCount\":4"));
}
