/// Provider language code and source file name for one client token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguage {
    /// Identifier the provider recognizes
    pub provider_language: String,
    /// Name given to the single submitted source file
    pub file_name: &'static str,
}

impl ResolvedLanguage {
    /// Map a client language token to the provider conventions.
    ///
    /// Matching is exact and case-sensitive. The historical front ends used
    /// `python3` and `c_cpp` for the same targets, so both alias forms are
    /// reconciled here and nowhere else. Unknown tokens pass through to the
    /// provider unchanged and keep the Java source file name.
    // TODO: confirm with product whether unknown tokens should really fall
    // back to the Java file name, or be rejected outright.
    pub fn resolve(token: &str) -> Self {
        let (provider_language, file_name) = match token {
            "python" | "python3" => ("python", "main.py"),
            "cpp" | "c_cpp" => ("cpp", "main.cpp"),
            "java" => ("java", "Main.java"),
            other => (other, "Main.java"),
        };

        Self {
            provider_language: provider_language.to_string(),
            file_name,
        }
    }
}
