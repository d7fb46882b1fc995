#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelperCommand {
    pub command: &'static str,
    pub description: &'static str,
}
