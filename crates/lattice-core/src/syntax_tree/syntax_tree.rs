use crate::ast;
use crate::executable::RootOperationTypes;
use crate::outline::Outline;
use crate::syntax_tree::Strictness;
use crate::syntax_tree::SyntaxTreeError;
use crate::syntax_tree::SyntaxTreeSource;

type Result<T> = std::result::Result<T, SyntaxTreeError>;

/// Owns one parsed IDL [`ast::schema::Document`] and exposes merge, search,
/// outline and round-trip operations over it.
///
/// Construction comes in two styles: strict constructors
/// ([`SyntaxTree::from_sdl()`], [`SyntaxTree::from_ast()`]) return the
/// failure, while [`SyntaxTree::from_source()`] logs it and returns `None`.
/// Operations that rewrite the document follow the same split (e.g.
/// [`SyntaxTree::set_ast()`] vs [`SyntaxTree::update_ast()`]); the tolerant
/// variants always leave the tree in its last valid state.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxTree {
    pub(super) document: ast::schema::Document,
}
impl SyntaxTree {
    /// A tree with zero definitions.
    pub fn empty_document() -> Self {
        Self {
            document: ast::empty_document(),
        }
    }

    /// A tree holding only `type Mutation`, with no fields.
    pub fn empty_mutation() -> Self {
        Self::with_empty_object_type("Mutation")
    }

    /// A tree holding only `type Query`, with no fields.
    pub fn empty_query() -> Self {
        Self::with_empty_object_type("Query")
    }

    fn with_empty_object_type(type_name: &str) -> Self {
        Self {
            document: ast::schema::Document {
                definitions: vec![
                    ast::schema::Definition::TypeDefinition(
                        ast::schema::TypeDefinition::Object(
                            ast::schema::ObjectType::new(type_name.to_string()),
                        ),
                    ),
                ],
            },
        }
    }

    /// Build a tree from an already-parsed document.
    ///
    /// The document is printed and re-parsed first, so a document that does
    /// not survive that round-trip is rejected with
    /// [`SyntaxTreeError::Serialization`].
    pub fn from_ast(document: ast::schema::Document) -> Result<Self> {
        let mut tree = Self::empty_document();
        tree.set_ast(document)?;
        Ok(tree)
    }

    /// Parse IDL text into a tree.
    pub fn from_sdl(sdl: &str) -> Result<Self> {
        let document = ast::parse(sdl).map_err(|err| SyntaxTreeError::Parse {
            err: err.to_string(),
        })?;
        Ok(Self { document })
    }

    /// Build a tree from IDL text, a document, or another tree, returning
    /// `None` (and logging why) if that fails.
    pub fn from_source<'a>(source: impl Into<SyntaxTreeSource<'a>>) -> Option<Self> {
        Strictness::Tolerant
            .settle(Self::from_source_impl(source.into()), "syntax tree construction")
            .ok()
            .flatten()
    }

    pub(super) fn from_source_impl(source: SyntaxTreeSource<'_>) -> Result<Self> {
        match source {
            SyntaxTreeSource::Document(document) => Self::from_ast(document),
            SyntaxTreeSource::Sdl(sdl) => Self::from_sdl(&sdl),
            SyntaxTreeSource::Tree(tree) => Ok(tree.into_owned()),
        }
    }

    pub fn document(&self) -> &ast::schema::Document {
        &self.document
    }

    pub fn into_document(self) -> ast::schema::Document {
        self.document
    }

    /// Replace this tree's definitions with those of `document`, returning
    /// an error (and leaving the tree untouched) if `document` does not
    /// survive a print/parse round-trip.
    pub fn set_ast(&mut self, document: ast::schema::Document) -> Result<&mut Self> {
        self.replace_document(document, Strictness::Strict)?;
        Ok(self)
    }

    /// Like [`SyntaxTree::set_ast()`], but a failed round-trip is logged and
    /// the tree keeps its previous definitions.
    pub fn update_ast(&mut self, document: ast::schema::Document) -> &mut Self {
        // Tolerant replacement reports failures through the log, never as
        // an `Err`.
        let _ = self.replace_document(document, Strictness::Tolerant);
        self
    }

    pub(super) fn replace_document(
        &mut self,
        candidate: ast::schema::Document,
        strictness: Strictness,
    ) -> Result<()> {
        let checked = strictness.settle(check_round_trip(&candidate), "syntax tree update")?;
        if checked.is_some() {
            self.document.definitions = candidate.definitions;
        }
        Ok(())
    }

    /// A fresh [`Outline`] of the current document.
    pub fn outline(&self) -> Outline {
        Outline::from_document(&self.document)
    }

    /// The root operation type names this document declares, either through
    /// a `schema { ... }` definition or by the conventional type names.
    pub fn root_operation_types(&self) -> RootOperationTypes {
        RootOperationTypes::from_document(&self.document)
    }

    /// Print the document as IDL, verifying that the output parses again.
    pub fn to_sdl(&self) -> Result<String> {
        let sdl = ast::print(&self.document);
        ast::parse(&sdl).map_err(|err| SyntaxTreeError::Serialization {
            err: err.to_string(),
            sdl: sdl.to_owned(),
        })?;
        Ok(sdl)
    }
}
impl std::default::Default for SyntaxTree {
    fn default() -> Self {
        Self::empty_document()
    }
}
impl std::fmt::Display for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&ast::print(&self.document))
    }
}
impl std::str::FromStr for SyntaxTree {
    type Err = SyntaxTreeError;

    fn from_str(sdl: &str) -> Result<Self> {
        Self::from_sdl(sdl)
    }
}

/// The reparsed copy is discarded: printing is lossy for some literals (a
/// `1.0` default prints as `1`), so only the candidate itself is kept.
fn check_round_trip(document: &ast::schema::Document) -> Result<()> {
    let sdl = ast::print(document);
    ast::parse(&sdl).map_err(|err| SyntaxTreeError::Serialization {
        err: err.to_string(),
        sdl,
    })?;
    Ok(())
}
