pub mod multipart;
pub mod ocr_handler;
pub mod puzzle_handler;
pub mod quiz_handler;
pub mod report_handler;
pub mod status_handler;
pub mod trivia_handler;
pub mod user_handler;

use actix_web::web;

use crate::errors::AppError;

/// Malformed JSON bodies answer with the same error shape as every other 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into())
}

/// Raises the buffered-body limit so JSON-or-multipart routes accept uploads
/// of up to `max_upload_bytes` plus form overhead.
pub fn payload_config(max_upload_bytes: usize) -> web::PayloadConfig {
    web::PayloadConfig::new(max_upload_bytes + 64 * 1024)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(status_handler::root)
        .service(status_handler::health_check)
        .service(status_handler::api_test)
        .service(quiz_handler::generate_quiz)
        .service(quiz_handler::generate_custom_quiz)
        .service(puzzle_handler::generate_crossword)
        .service(puzzle_handler::generate_word_search)
        .service(puzzle_handler::generate_word_list)
        .service(trivia_handler::generate_daily_trivia)
        .service(ocr_handler::extract_text)
        .service(report_handler::export_pdf)
        .service(user_handler::create_user)
        .service(user_handler::delete_user)
        .service(user_handler::update_email);
}
