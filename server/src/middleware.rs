use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{self, HeaderName, HeaderValue},
    Error,
};
use actix_web_lab::middleware::Next;

/// Origins granted an `Access-Control-Allow-Origin` echo. Anything else is
/// still served, it just never receives the permissive header, leaving
/// enforcement to the browser.
pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3100", "http://localhost:3010"];

const EXPOSE_HEADERS: &str = "Access-Control-Allow-Credentials, Access-Control-Allow-Headers, \
     Access-Control-Allow-Methods, Access-Control-Expose-Headers, Content-Length, \
     Content-Security-Policy, Content-Type, Date, ETag, Vary, X-Frame-Options, X-XSS-Protection";

/// Logs method, URI and declared origin for every request before dispatch
pub async fn request_log(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_owned();

    log::info!("{} {} [Origin: {}]", req.method(), req.uri(), origin);

    next.call(req).await
}

/// Injects the cross-origin and security header set into every response,
/// success or error, and forces the content type to JSON.
pub async fn cross_origin_headers(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let request_origin = req.headers().get(header::ORIGIN).cloned();

    let mut res = next.call(req).await?;

    let headers = res.headers_mut();

    // Exact-match allow-list echo. A miss omits the header, it never blocks
    if let Some(origin) = request_origin {
        if ALLOWED_ORIGINS
            .iter()
            .any(|allowed| origin.as_bytes() == allowed.as_bytes())
        {
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
    }

    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("OPTIONS, GET, POST, PUT, PATCH, DELETE, HEAD"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Origin, X-Requested-With, Content-Type, Accept"),
    );
    headers.insert(
        header::ACCESS_CONTROL_EXPOSE_HEADERS,
        HeaderValue::from_static(EXPOSE_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(
        HeaderName::from_static("x-xss-protection"),
        HeaderValue::from_static("1; mode=block"),
    );
    headers.insert(
        header::X_FRAME_OPTIONS,
        HeaderValue::from_static("SAMEORIGIN"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self'"),
    );
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    Ok(res)
}
