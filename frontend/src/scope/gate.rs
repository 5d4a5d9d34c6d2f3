/// Blur gate in front of the generated report. This is a display toggle,
/// not access control: the report is already computed client-side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadGate {
    locked: bool,
    email: Option<String>,
}

impl Default for LeadGate {
    fn default() -> Self {
        Self { locked: true, email: None }
    }
}

/// Light client-side check shared by every lead form on the site.
pub fn looks_like_email(email: &str) -> bool {
    email.contains('@')
}

impl LeadGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns whether the gate is open afterwards.
    pub fn unlock(&mut self, email: &str) -> bool {
        let email = email.trim();
        if looks_like_email(email) {
            self.locked = false;
            self.email = Some(email.to_string());
        }
        !self.locked
    }
}
