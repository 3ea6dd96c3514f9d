#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line: Option<usize>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn text(&self) -> &str {
        &self.message
    }

    /// Locates the error at a program line. An error that already
    /// knows its line keeps it.
    pub fn in_line(self, line: usize) -> Error {
        if self.line.is_some() {
            return self;
        }
        Error {
            line: Some(line),
            ..self
        }
    }

    pub fn message(self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        Error {
            message: message.to_string(),
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnknownInstruction = 3,
    InvalidSource = 4,
    InvalidDestination = 5,
    NotANumber = 6,
    IntegerExpected = 7,
    StackUnderflow = 8,
    UndefinedLabel = 9,
    OutOfMemory = 10,
    NoPendingInput = 11,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            SyntaxError => "SYNTAX ERROR",
            UnknownInstruction => "UNKNOWN INSTRUCTION",
            InvalidSource => "INVALID DATA SOURCE",
            InvalidDestination => "INVALID DATA DESTINATION",
            NotANumber => "NOT A NUMBER",
            IntegerExpected => "INTEGER EXPECTED",
            StackUnderflow => "STACK UNDERFLOW",
            UndefinedLabel => "UNDEFINED LABEL",
            OutOfMemory => "OUT OF MEMORY",
            NoPendingInput => "NO PENDING INPUT",
        };
        write!(f, "{}", s)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line) = self.line {
            suffix.push_str(&format!(" IN {}", line));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}
