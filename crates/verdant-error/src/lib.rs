use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;

#[cfg(feature = "backtrace")]
use std::backtrace::Backtrace;

pub type VerdantResult<T> = Result<T, VerdantError>;

/// Stable discriminant for a [VerdantError], independent of its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidConfig,
    Operator,
    Selection,
    Evaluation,
    Engine,
    Context,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrString(Cow<'static, str>);

impl AsRef<str> for ErrString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ErrString {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ErrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: Into<Cow<'static, str>>> From<T> for ErrString {
    fn from(v: T) -> Self {
        Self(v.into())
    }
}

/// The error taxonomy of the library.
///
/// * `InvalidConfig` - a builder or factory was given parameters that can never
///   produce a working engine (rate outside `[0, 1]`, empty range, mismatched
///   range/filter counts, zero population, ...). Raised before evolution starts.
/// * `Operator` - a crossover or mutator violated its contract at runtime
///   (wrong parent count, unequal chromosome lengths, an invalid gene).
/// * `Selection` - a selector was invoked on an empty population or failed to
///   produce the requested number of individuals.
/// * `Evaluation` - the user fitness function produced an unusable score.
/// * `Engine` - an internal invariant of the evolution loop was broken.
#[derive(Debug)]
pub enum VerdantError {
    InvalidConfig {
        message: ErrString,
    },
    Operator {
        message: ErrString,
    },
    Selection {
        message: ErrString,
    },
    Evaluation {
        message: ErrString,
    },
    Engine {
        message: ErrString,
    },
    Context {
        context: ErrorContext,
        source: Box<VerdantError>,
        #[cfg(feature = "backtrace")]
        backtrace: Backtrace,
    },
}

impl VerdantError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            Self::Operator { .. } => ErrorCode::Operator,
            Self::Selection { .. } => ErrorCode::Selection,
            Self::Evaluation { .. } => ErrorCode::Evaluation,
            Self::Engine { .. } => ErrorCode::Engine,
            Self::Context { .. } => ErrorCode::Context,
        }
    }

    /// The code of the innermost error, looking through any context wrappers.
    pub fn root_code(&self) -> ErrorCode {
        match self {
            Self::Context { source, .. } => source.root_code(),
            _ => self.code(),
        }
    }

    pub fn with_context(self, msg: impl Into<String>) -> Self {
        VerdantError::Context {
            context: ErrorContext::new(msg),
            source: Box::new(self),
            #[cfg(feature = "backtrace")]
            backtrace: Backtrace::capture(),
        }
    }
}

impl Display for VerdantError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { message } => write!(f, "Invalid configuration: {}", message),
            Self::Operator { message } => write!(f, "Operator error: {}", message),
            Self::Selection { message } => write!(f, "Selection error: {}", message),
            Self::Evaluation { message } => write!(f, "Evaluation error: {}", message),
            Self::Engine { message } => write!(f, "Engine error: {}", message),
            Self::Context {
                context, source, ..
            } => write!(f, "{}\nCaused by: {}", context, source),
        }
    }
}

impl std::error::Error for VerdantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Context { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ErrorContext {
    message: String,
}

impl ErrorContext {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorContext {}

// Ergonomic Result extensions (context)
pub trait ResultExt<T> {
    fn context(self, msg: impl Into<String>) -> VerdantResult<T>;
    fn with_context<F: FnOnce() -> String>(self, f: F) -> VerdantResult<T>;
}

impl<T, E: Into<VerdantError>> ResultExt<T> for Result<T, E> {
    fn context(self, msg: impl Into<String>) -> VerdantResult<T> {
        self.map_err(|e| e.into().with_context(msg))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> VerdantResult<T> {
        self.map_err(|e| e.into().with_context(f()))
    }
}

// Macros: err, bail, ensure
#[doc(hidden)]
pub mod __private {
    #[inline]
    #[cold]
    #[must_use]
    pub fn must_use<E>(e: E) -> E {
        e
    }
}

#[macro_export]
macro_rules! verdant_err {
    (InvalidConfig: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::VerdantError::InvalidConfig { message: format!($fmt, $($arg),*).into() })
    };
    (Operator: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::VerdantError::Operator { message: format!($fmt, $($arg),*).into() })
    };
    (Selection: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::VerdantError::Selection { message: format!($fmt, $($arg),*).into() })
    };
    (Evaluation: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::VerdantError::Evaluation { message: format!($fmt, $($arg),*).into() })
    };
    (Engine: $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::__private::must_use($crate::VerdantError::Engine { message: format!($fmt, $($arg),*).into() })
    };
}

#[macro_export]
macro_rules! verdant_bail {
    ($($tt:tt)+) => { return Err($crate::verdant_err!($($tt)+)) };
}

#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($tt:tt)+) => {
        if !$cond { $crate::verdant_bail!($($tt)+); }
    };
}
