//! Two-attempt request policy: primary, then secondary, then give up.

use std::fmt;
use std::future::Future;

/// Both attempts failed.
#[derive(Debug, Clone, PartialEq)]
pub struct FallbackError<E> {
    pub primary: E,
    pub secondary: E,
}

impl<E: fmt::Display> fmt::Display for FallbackError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (fallback: {})", self.primary, self.secondary)
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for FallbackError<E> {}

/// Run `primary`; if it fails, run `secondary` exactly once.
///
/// `secondary` is never started when `primary` succeeds.
pub async fn with_fallback<T, E, P, PF, S, SF>(
    primary: P,
    secondary: S,
) -> Result<T, FallbackError<E>>
where
    E: fmt::Display,
    P: FnOnce() -> PF,
    PF: Future<Output = Result<T, E>>,
    S: FnOnce() -> SF,
    SF: Future<Output = Result<T, E>>,
{
    let primary_err = match primary().await {
        Ok(value) => return Ok(value),
        Err(e) => e,
    };
    tracing::warn!("Primary attempt failed, trying fallback: {}", primary_err);
    match secondary().await {
        Ok(value) => Ok(value),
        Err(secondary_err) => Err(FallbackError {
            primary: primary_err,
            secondary: secondary_err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_primary_success_skips_secondary() {
        let secondary_calls = Cell::new(0);
        let result: Result<u32, FallbackError<String>> = with_fallback(
            || async { Ok(1) },
            || async {
                secondary_calls.set(secondary_calls.get() + 1);
                Ok(2)
            },
        )
        .await;
        assert_eq!(result.unwrap(), 1);
        assert_eq!(secondary_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_secondary_runs_once_after_failure() {
        let secondary_calls = Cell::new(0);
        let result: Result<u32, FallbackError<String>> = with_fallback(
            || async { Err("down".to_string()) },
            || async {
                secondary_calls.set(secondary_calls.get() + 1);
                Ok(2)
            },
        )
        .await;
        assert_eq!(result.unwrap(), 2);
        assert_eq!(secondary_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_both_fail() {
        let result: Result<u32, FallbackError<String>> = with_fallback(
            || async { Err("direct".to_string()) },
            || async { Err("proxy".to_string()) },
        )
        .await;
        let err = result.unwrap_err();
        assert_eq!(err.primary, "direct");
        assert_eq!(err.secondary, "proxy");
        assert_eq!(err.to_string(), "direct (fallback: proxy)");
    }
}
