use super::*;
use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

#[tokio::test]
async fn healthz_returns_ok() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found_on_base_routes() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/login").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

const BOUNDARY: &str = "calorie-scan-boundary";

fn multipart_request(parts: &[(&str, Option<&str>, &str)]) -> Request<Body> {
    let mut body = String::new();
    for (name, file_name, value) in parts {
        body.push_str(&format!("--{BOUNDARY}\r\n"));
        match file_name {
            Some(file_name) => body.push_str(&format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )),
            None => body.push_str(&format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n")),
        }
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{BOUNDARY}--\r\n"));

    Request::builder()
        .method("POST")
        .uri("/scan")
        .header("content-type", format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

fn location(response: &axum::response::Response) -> &str {
    response.headers().get("location").unwrap().to_str().unwrap()
}

#[tokio::test]
async fn scan_with_image_url_redirects_home_received() {
    let request = multipart_request(&[("file", Some(""), ""), ("image_url", None, "https://x.test/a.jpg")]);
    let response = base_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?scan=received");
}

#[tokio::test]
async fn scan_with_file_redirects_home_received() {
    let request = multipart_request(&[("file", Some("lunch.jpg"), "jpegbytes"), ("image_url", None, "")]);
    let response = base_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?scan=received");
}

#[tokio::test]
async fn scan_without_inputs_redirects_home_missing() {
    let request = multipart_request(&[("file", Some(""), ""), ("image_url", None, "   ")]);
    let response = base_routes().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?scan=missing");
}
