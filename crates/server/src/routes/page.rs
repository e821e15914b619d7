use actix_web::{get, HttpResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// The single page: input form plus digest output
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_index_serves_form() {
        let app = test::init_service(App::new().service(index)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(r#"id="conversation""#));
        assert!(html.contains(r#"id="participants""#));
        assert!(html.contains("Generate TL;DR"));
        assert!(html.contains("/api/summarize"));
    }
}
