use crate::syntax_tree::SyntaxTreeError;

/// Whether a [`SyntaxTree`](crate::SyntaxTree) operation propagates internal
/// failures ([`Strictness::Strict`]) or logs them and leaves the tree as it
/// was ([`Strictness::Tolerant`]).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Strictness {
    Strict,
    Tolerant,
}
impl Strictness {
    /// Strict: pass `result` through. Tolerant: turn an error into
    /// `Ok(None)` after logging it.
    pub(crate) fn settle<T>(
        self,
        result: Result<T, SyntaxTreeError>,
        action: &str,
    ) -> Result<Option<T>, SyntaxTreeError> {
        match (self, result) {
            (_, Ok(value)) => Ok(Some(value)),
            (Self::Strict, Err(err)) => Err(err),
            (Self::Tolerant, Err(err)) => {
                log::warn!("Skipping {action}; the syntax tree is unchanged: {err}");
                Ok(None)
            },
        }
    }
}
