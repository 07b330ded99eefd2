//! CSV export for report tables.
//!
//! [`to_csv`] is pure string assembly; [`download`] hands the result to the
//! browser as a generated file. Fields containing separators, quotes, or
//! newlines are quoted with doubled inner quotes.

/// Assemble a CSV document from a header row and data rows.
pub fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    for row in rows {
        lines.push(
            row.iter()
                .map(|field| escape(field))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Trigger a browser download of `content` as `filename`.
#[cfg(target_arch = "wasm32")]
pub fn download(filename: &str, content: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(element) = document.create_element("a") {
        if let Ok(anchor) = element.dyn_into::<web_sys::HtmlAnchorElement>() {
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
        }
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

/// No-op outside the browser; report exports are a web-only affordance.
#[cfg(not(target_arch = "wasm32"))]
pub fn download(_filename: &str, _content: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_stay_unquoted() {
        let csv = to_csv(
            &["car_id", "revenue"],
            &[vec!["1".into(), "1200.50".into()]],
        );
        assert_eq!(csv, "car_id,revenue\n1,1200.50");
    }

    #[test]
    fn test_separator_and_quote_fields_are_escaped() {
        let csv = to_csv(
            &["car"],
            &[
                vec!["Toyota Corolla, 2021".into()],
                vec!["the \"good\" one".into()],
            ],
        );
        assert_eq!(
            csv,
            "car\n\"Toyota Corolla, 2021\"\n\"the \"\"good\"\" one\""
        );
    }

    #[test]
    fn test_empty_rows_yield_header_only() {
        assert_eq!(to_csv(&["a", "b"], &[]), "a,b");
    }
}
