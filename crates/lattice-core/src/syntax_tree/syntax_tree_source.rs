use crate::ast;
use crate::syntax_tree::SyntaxTree;
use std::borrow::Cow;

/// Anything a [`SyntaxTree`] can be built from or merged with.
#[derive(Debug)]
pub enum SyntaxTreeSource<'a> {
    Document(ast::schema::Document),
    Sdl(Cow<'a, str>),
    Tree(Cow<'a, SyntaxTree>),
}
impl<'a> std::convert::From<&'a str> for SyntaxTreeSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Sdl(Cow::Borrowed(value))
    }
}
impl<'a> std::convert::From<&'a String> for SyntaxTreeSource<'a> {
    fn from(value: &'a String) -> Self {
        Self::Sdl(Cow::Borrowed(value.as_str()))
    }
}
impl std::convert::From<String> for SyntaxTreeSource<'_> {
    fn from(value: String) -> Self {
        Self::Sdl(Cow::Owned(value))
    }
}
impl std::convert::From<ast::schema::Document> for SyntaxTreeSource<'_> {
    fn from(value: ast::schema::Document) -> Self {
        Self::Document(value)
    }
}
impl<'a> std::convert::From<&'a SyntaxTree> for SyntaxTreeSource<'a> {
    fn from(value: &'a SyntaxTree) -> Self {
        Self::Tree(Cow::Borrowed(value))
    }
}
impl std::convert::From<SyntaxTree> for SyntaxTreeSource<'_> {
    fn from(value: SyntaxTree) -> Self {
        Self::Tree(Cow::Owned(value))
    }
}
