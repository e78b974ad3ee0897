use serde_json::Value;

use crate::duration::estimate_duration_seconds;
use crate::slug::slugify;
use crate::validate::{normalize_url, source_host};
use crate::{ClipInput, ClipMetadata, ClipStatus, NormalizedClip, ValidationError};

/// Validate and normalize a clip taken from an untyped JSON payload.
pub fn process_clip(payload: &Value) -> Result<NormalizedClip, ValidationError> {
    normalize(ClipInput::from_value(payload)?)
}

/// Validate a boundary-normalized clip and derive its computed fields.
///
/// Pure: the same input always yields the same output. A bad or missing URL
/// is not an error, it just leaves `normalized_url` and `source_host` empty.
pub fn normalize(input: ClipInput) -> Result<NormalizedClip, ValidationError> {
    if input.title.is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    let status = if input.status.is_empty() {
        ClipStatus::default()
    } else {
        ClipStatus::parse(&input.status).ok_or(ValidationError::InvalidStatus)?
    };

    let url = normalize_url(&input.url);

    Ok(NormalizedClip {
        slug: slugify(&input.title),
        estimated_duration_seconds: estimate_duration_seconds(&input.title, &input.description),
        title_length: input.title.encode_utf16().count(),
        status,
        metadata: ClipMetadata {
            has_description: !input.description.is_empty(),
            source_host: url.as_ref().and_then(source_host),
        },
        normalized_url: url.map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn words(n: usize) -> String {
        vec!["lorem"; n].join(" ")
    }

    fn input(title: &str, status: &str) -> ClipInput {
        ClipInput {
            title: title.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    #[test]
    fn title_check_runs_before_status_check() {
        assert_eq!(normalize(input("", "bogus")), Err(ValidationError::MissingTitle));
    }

    #[test]
    fn status_defaults_and_rejects() {
        let ok = normalize(input("T", "")).expect("valid");
        assert_eq!(ok.status, ClipStatus::Active);
        let ok = normalize(input("T", "inactive")).expect("valid");
        assert_eq!(ok.status, ClipStatus::Inactive);
        assert_eq!(normalize(input("T", "archived")), Err(ValidationError::InvalidStatus));
    }

    #[test]
    fn title_length_counts_utf16_units() {
        let ok = normalize(input("Café", "")).expect("valid");
        assert_eq!(ok.title_length, 4);
        assert_eq!(ok.slug, "cafe");
        let ok = normalize(input("😀", "")).expect("valid");
        assert_eq!(ok.title_length, 2);
    }

    #[test]
    fn missing_url_leaves_metadata_empty() {
        let ok = normalize(input("T", "")).expect("valid");
        assert_eq!(ok.normalized_url, None);
        assert_eq!(ok.metadata.source_host, None);
        assert!(!ok.metadata.has_description);
    }

    #[test]
    fn end_to_end_example() {
        let clip = process_clip(&json!({
            "title": "Laravel Queue Basics",
            "description": "Introduction to queue workers and jobs.",
            "url": "https://example.com/videos/laravel-queue-basics",
            "status": "active",
        }))
        .expect("valid clip");

        assert_eq!(clip.slug, "laravel-queue-basics");
        assert_eq!(clip.status, ClipStatus::Active);
        assert_eq!(
            clip.normalized_url.as_deref(),
            Some("https://example.com/videos/laravel-queue-basics")
        );
        assert_eq!(clip.metadata.source_host.as_deref(), Some("example.com"));
        assert!(clip.metadata.has_description);
        assert_eq!(clip.estimated_duration_seconds, 60);
        assert_eq!(clip.title_length, 20);
    }

    #[test]
    fn same_input_same_output() {
        let payload = json!({"title": "Café Déjà Vu!!", "url": "HTTPS://Example.com"});
        let a = serde_json::to_string(&process_clip(&payload).expect("valid")).expect("json");
        let b = serde_json::to_string(&process_clip(&payload).expect("valid")).expect("json");
        assert_eq!(a, b);
    }

    #[test]
    fn null_and_scalar_bodies_are_rejected() {
        assert_eq!(process_clip(&Value::Null), Err(ValidationError::MissingOrInvalidBody));
        assert_eq!(
            process_clip(&json!("a string")),
            Err(ValidationError::MissingOrInvalidBody)
        );
    }

    #[test]
    fn array_bodies_fail_on_title() {
        for payload in [json!([]), json!([1, 2]), json!([{"title": "x"}])] {
            assert_eq!(process_clip(&payload), Err(ValidationError::MissingTitle));
        }
    }

    #[test]
    fn empty_titles_are_rejected() {
        for payload in [
            json!({}),
            json!({"title": null}),
            json!({"title": 5}),
            json!({"title": ["x"]}),
            json!({"title": "   \t"}),
            json!({"title": "\u{feff}"}),
            json!({"title": " \u{feff}\u{00a0} "}),
        ] {
            assert_eq!(process_clip(&payload), Err(ValidationError::MissingTitle));
        }
    }

    #[test]
    fn status_rules() {
        let clip = process_clip(&json!({"title": "T", "status": "  "})).expect("valid");
        assert_eq!(clip.status, ClipStatus::Active);
        let clip = process_clip(&json!({"title": "T", "status": 3})).expect("valid");
        assert_eq!(clip.status, ClipStatus::Active);
        assert_eq!(
            process_clip(&json!({"title": "T", "status": "archived"})),
            Err(ValidationError::InvalidStatus)
        );
    }

    #[test]
    fn bad_urls_degrade_gracefully() {
        for url in [json!("not a url"), json!("ftp://example.com/x"), json!(12)] {
            let clip = process_clip(&json!({"title": "T", "url": url})).expect("valid");
            assert_eq!(clip.normalized_url, None);
            assert_eq!(clip.metadata.source_host, None);
        }
    }

    #[test]
    fn slug_folds_accents() {
        let clip = process_clip(&json!({"title": "Café Déjà Vu!!"})).expect("valid");
        assert_eq!(clip.slug, "cafe-deja-vu");
    }

    #[test]
    fn duration_floor_and_scaling() {
        let clip = process_clip(&json!({"title": "Hi", "description": ""})).expect("valid");
        assert_eq!(clip.estimated_duration_seconds, 60);

        let clip =
            process_clip(&json!({"title": words(10), "description": words(250)})).expect("valid");
        assert_eq!(clip.estimated_duration_seconds, 120);

        let clip =
            process_clip(&json!({"title": words(11), "description": words(250)})).expect("valid");
        assert_eq!(clip.estimated_duration_seconds, 180);
    }
}
