/// The version of the running server
#[derive(Debug, Clone, Copy)]
pub struct Version(pub &'static str);
