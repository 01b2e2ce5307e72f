use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

/// What a command prints: plain text lines, or the same result as JSON.
#[derive(Debug)]
pub struct CommandOutput {
    pub lines: Vec<String>,
    pub data: serde_json::Value,
    /// Set when the command ran but its verdict should fail the process.
    pub rejected: bool,
}

impl CommandOutput {
    pub fn new<T: Serialize>(lines: Vec<String>, data: &T) -> anyhow::Result<Self> {
        Ok(Self {
            lines,
            data: serde_json::to_value(data)?,
            rejected: false,
        })
    }

    pub fn rejected(mut self, rejected: bool) -> Self {
        self.rejected = rejected;
        self
    }

    pub fn render(&self, json: bool) -> anyhow::Result<String> {
        if json {
            Ok(serde_json::to_string(&SuccessResponse::new(&self.data))?)
        } else {
            Ok(self.lines.join("\n"))
        }
    }
}

pub fn render_error(err: &anyhow::Error, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string(&ErrorResponse::new(format!("{:#}", err)))?)
    } else {
        Ok(format!("Error: {:#}", err))
    }
}
