use std::fmt;

/// Startup failures. Nothing in the frame loop produces one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// SDL could not create the window or the GL context.
    Window(String),
    /// GL function pointers could not be resolved.
    Loader(String),
    /// A shader stage failed to compile; carries the stage name and info log.
    Compile { stage: &'static str, log: String },
    /// A program failed to link; carries the info log.
    Link(String),
    /// A GL call reported an error or returned a null object.
    Gl(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Window(msg) => write!(f, "window creation failed: {msg}"),
            Error::Loader(msg) => write!(f, "GL loader initialization failed: {msg}"),
            Error::Compile { stage, log } => {
                write!(f, "{stage} shader compilation failed:\n{}", log.trim_end())
            }
            Error::Link(log) => write!(f, "shader program link failed:\n{}", log.trim_end()),
            Error::Gl(msg) => write!(f, "GL error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_error_names_stage_and_log() {
        let err = Error::Compile {
            stage: "fragment",
            log: "0:3(1): error: syntax error\n".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fragment shader compilation failed:\n0:3(1): error: syntax error"
        );
    }

    #[test]
    fn link_error_carries_log() {
        let err = Error::Link("undefined main".to_string());
        assert!(err.to_string().ends_with("undefined main"));
    }
}
