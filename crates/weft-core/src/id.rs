//! Direction index and diagram label types.

use std::fmt;

/// A spacetime direction index.
///
/// Gamma tables hold one left-handed insertion matrix per direction;
/// `Direction(mu)` indexes into that table, `0 <= mu < ndim`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Direction(pub usize);

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Direction {
    fn from(v: usize) -> Self {
        Self(v)
    }
}

/// Identifies which of the two Eye-type diagram topologies a correlator
/// belongs to.
///
/// The wire labels (`HW_S`, `HW_E`) match the names used in result
/// records so downstream analysis can key on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagramLabel {
    /// Connected topology: trace of the body–loop product.
    Saucer,
    /// Disconnected-trace topology: product of body and loop traces.
    Eye,
}

impl DiagramLabel {
    /// The stable string label attached to emitted correlators.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Saucer => "HW_S",
            Self::Eye => "HW_E",
        }
    }
}

impl fmt::Display for DiagramLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        assert_eq!(DiagramLabel::Saucer.as_str(), "HW_S");
        assert_eq!(DiagramLabel::Eye.as_str(), "HW_E");
    }

    #[test]
    fn direction_display() {
        assert_eq!(Direction(3).to_string(), "3");
    }
}
