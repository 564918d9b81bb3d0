use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Builds the CORS layer for the configured origins. No layer is needed if no
/// origin is allowed.
pub fn layer(allowed_origins: &[String]) -> anyhow::Result<Option<CorsLayer>> {
    if allowed_origins.is_empty() {
        return Ok(None);
    }

    let allow_origin = if allowed_origins.iter().any(|origin| origin == "*") {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .with_context(|| format!("Invalid allowed origin {origin:?}"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(Some(
        CorsLayer::new()
            .allow_methods([Method::GET])
            .allow_origin(allow_origin),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_origins() {
        assert!(layer(&[]).unwrap().is_none());
    }

    #[test]
    fn origins() {
        let origins = ["http://localhost:5173".to_owned(), "*".to_owned()];
        assert!(layer(&origins).unwrap().is_some());
    }

    #[test]
    fn invalid_origin() {
        let err = layer(&["http://bad\norigin".to_owned()]).unwrap_err();
        assert!(err.to_string().contains("Invalid allowed origin"));
    }
}
