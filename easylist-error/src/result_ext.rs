use crate::StackError;

/// `.context(..)` для любых `Result`, чья ошибка приводится к [`StackError`].
pub trait ResultExt<T> {
    fn context<C>(
        self,
        ctx: C,
    ) -> Result<T, StackError>
    where
        C: Into<String>;

    /// Как [`context`](ResultExt::context), но сообщение строится только при
    /// ошибке.
    fn with_context<C, F>(
        self,
        f: F,
    ) -> Result<T, StackError>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<StackError>,
{
    #[track_caller]
    fn context<C>(
        self,
        ctx: C,
    ) -> Result<T, StackError>
    where
        C: Into<String>,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().context(ctx)),
        }
    }

    #[track_caller]
    fn with_context<C, F>(
        self,
        f: F,
    ) -> Result<T, StackError>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(e.into().context(f())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{stack::tests::Empty, StatusCode};

    #[test]
    fn test_context_wraps_error() {
        let r: Result<(), Empty> = Err(Empty);
        let err = r.context("reading first item").unwrap_err();

        assert_eq!(err.status_code(), StatusCode::ListIsEmpty);
        assert_eq!(err.contexts().len(), 1);
        assert!(err.contexts()[0].location.file().ends_with("result_ext.rs"));
    }

    #[test]
    fn test_with_context_is_lazy() {
        let ok: Result<u8, Empty> = Ok(1);
        let value = ok
            .with_context(|| -> String { panic!("context built for Ok") })
            .unwrap();
        assert_eq!(value, 1);

        let failed: Result<u8, Empty> = Err(Empty);
        let err = failed.with_context(|| format!("step {}", 2)).unwrap_err();
        assert_eq!(err.to_string(), "step 2: empty");
    }
}
