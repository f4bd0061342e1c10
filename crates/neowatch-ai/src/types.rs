#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub prompt: String,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateResponse {
    pub provider: String,
    pub model: String,
    pub text: String,
}
