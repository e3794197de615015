#[cfg(test)]
pub mod fixtures {
    use crate::models::dto::request::ResultRow;

    pub const MC_REPLY: &str = r#"```json
[
  {"question": "Which gas do plants absorb?", "options": ["A. Oxygen", "B. Carbon dioxide", "C. Nitrogen", "D. Helium"], "answer": "B. Carbon dioxide"},
  {"question": "Where is chlorophyll found?", "options": ["A) Roots", "B) Chloroplasts", "C) Bark", "D) Seeds"], "answer": "chloroplasts"}
]
```"#;

    pub const TF_REPLY: &str = r#"[{"question": "Photosynthesis needs light.", "answer": "true"}]"#;

    pub fn result_row(name: &str) -> ResultRow {
        ResultRow {
            name: name.to_string(),
            quiz_title: "Photosynthesis".to_string(),
            score: "8".to_string(),
            total: "10".to_string(),
            percent: "80".to_string(),
            submitted_at: "2025-11-01T10:00:00Z".to_string(),
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use actix_web::http::StatusCode;

    use crate::{
        app_state::{AppState, Providers},
        config::Config,
        repositories::MockDailyTriviaRepository,
        services::{
            completion_provider::MockCompletionProvider, docx_extractor::DocxTextExtractor,
            identity_provider::MockIdentityProvider, ocr_provider::MockOcrProvider,
        },
    };

    pub const BOUNDARY: &str = "quizrush-test-boundary";

    /// Providers with no expectations: any call fails the test.
    pub struct MockProviders {
        pub completion: MockCompletionProvider,
        pub ocr: MockOcrProvider,
        pub identity: MockIdentityProvider,
        pub trivia_repository: MockDailyTriviaRepository,
    }

    impl Default for MockProviders {
        fn default() -> Self {
            Self {
                completion: MockCompletionProvider::new(),
                ocr: MockOcrProvider::new(),
                identity: MockIdentityProvider::new(),
                trivia_repository: MockDailyTriviaRepository::new(),
            }
        }
    }

    impl MockProviders {
        pub fn into_state(self) -> AppState {
            AppState::with_providers(
                Config::test_config(),
                Providers {
                    completion: Arc::new(self.completion),
                    ocr: Arc::new(self.ocr),
                    identity: Arc::new(self.identity),
                    extractor: Arc::new(DocxTextExtractor),
                    trivia_repository: Arc::new(self.trivia_repository),
                },
            )
        }
    }

    pub fn multipart_content_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    /// Encodes text fields and an optional `(filename, content type, bytes)` file.
    pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    BOUNDARY, name, value
                )
                .as_bytes(),
            );
        }
        if let Some((filename, content_type, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                    BOUNDARY, filename, content_type
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;

    #[test]
    fn multipart_body_closes_the_boundary() {
        let body = multipart_body(&[("title", "Planets")], Some(("a.txt", "text/plain", &b"Mars"[..])));
        let text = String::from_utf8(body).unwrap();

        assert!(text.contains("name=\"title\"\r\n\r\nPlanets\r\n"));
        assert!(text.contains("filename=\"a.txt\""));
        assert!(text.ends_with(&format!("--{}--\r\n", BOUNDARY)));
    }
}
