use crate::ast;
use crate::executable::ExecutableSchema;
use crate::name_matcher::NameMatcher;
use crate::syntax_tree::DEFAULT_CONSUMED_DEFINITION;
use crate::syntax_tree::DefinitionKind;
use crate::syntax_tree::Strictness;
use crate::syntax_tree::SyntaxTree;
use crate::syntax_tree::SyntaxTreeError;
use crate::syntax_tree::SyntaxTreeSource;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, SyntaxTreeError>;

impl SyntaxTree {
    /// Merge every definition of `other` into this tree.
    ///
    /// Definitions are visited in `other`'s document order:
    ///
    /// * A name this tree has not seen yet is appended as-is.
    /// * A same-named definition of a different [`DefinitionKind`] replaces
    ///   the existing one in place. Type definitions only meet type
    ///   definitions, type extensions only meet type extensions and
    ///   directive definitions only meet directive definitions.
    /// * Same-named object, interface and input object types (and their
    ///   extensions) concatenate their interfaces, directives and fields.
    ///   Duplicates are kept.
    /// * Same-named enums (and enum extensions) union their values by name;
    ///   the first occurrence wins, and this tree's values are scanned
    ///   first.
    /// * Any other same-kind pair (unions, scalars, directives, schema
    ///   definitions) is replaced by `other`'s definition.
    ///
    /// If `other` cannot be parsed or the merged document does not
    /// round-trip, the failure is logged and this tree is left unchanged.
    /// See [`SyntaxTree::try_append_definitions()`] to get the error
    /// instead.
    pub fn append_definitions<'a>(
        &mut self,
        other: impl Into<SyntaxTreeSource<'a>>,
    ) -> &mut Self {
        // Tolerant merges report failures through the log, never as an `Err`.
        let _ = self.append_definitions_impl(other.into(), Strictness::Tolerant);
        self
    }

    /// Strict form of [`SyntaxTree::append_definitions()`].
    pub fn try_append_definitions<'a>(
        &mut self,
        other: impl Into<SyntaxTreeSource<'a>>,
    ) -> Result<&mut Self> {
        self.append_definitions_impl(other.into(), Strictness::Strict)?;
        Ok(self)
    }

    fn append_definitions_impl(
        &mut self,
        other: SyntaxTreeSource<'_>,
        strictness: Strictness,
    ) -> Result<()> {
        let theirs = strictness.settle(
            Self::from_source_impl(other),
            "definition merge",
        )?;
        let Some(theirs) = theirs else {
            return Ok(());
        };

        let merged = merge_definitions(
            self.document.definitions.clone(),
            theirs.into_document().definitions,
        );
        self.replace_document(
            ast::schema::Document { definitions: merged },
            strictness,
        )
    }

    /// Move the definition named `definition_name` out of `donor` and into
    /// this tree.
    ///
    /// * Missing from `donor`: nothing happens.
    /// * Missing from this tree: the definition is removed from `donor` and
    ///   appended here.
    /// * Present in both as object types: the donor's interfaces,
    ///   directives and fields are appended to this tree's definition and
    ///   the donor's definition is removed.
    ///
    /// Present in both but not as object types on both sides is logged and
    /// leaves both trees unchanged.
    pub fn consume_definition(
        &mut self,
        donor: &mut SyntaxTree,
        definition_name: impl Into<NameMatcher>,
    ) -> &mut Self {
        let matcher = definition_name.into();
        let Some(donor_idx) = position_by_name(&donor.document.definitions, &matcher) else {
            return self;
        };

        let Some(our_idx) = position_by_name(&self.document.definitions, &matcher) else {
            let def = donor.document.definitions.remove(donor_idx);
            self.document.definitions.push(def);
            return self;
        };

        let our_kind = DefinitionKind::from(&self.document.definitions[our_idx]);
        let donor_kind = DefinitionKind::from(&donor.document.definitions[donor_idx]);
        if our_kind != DefinitionKind::Object || donor_kind != DefinitionKind::Object {
            log::warn!(
                "Not consuming {matcher}: only object types can be consumed \
                into an existing definition (found {our_kind} here and \
                {donor_kind} in the donor)."
            );
            return self;
        }

        let theirs = donor.document.definitions.remove(donor_idx);
        if let (
            ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Object(ours),
            ),
            ast::schema::Definition::TypeDefinition(
                ast::schema::TypeDefinition::Object(theirs),
            ),
        ) = (&mut self.document.definitions[our_idx], theirs) {
            ours.implements_interfaces.extend(theirs.implements_interfaces);
            ours.directives.extend(theirs.directives);
            ours.fields.extend(theirs.fields);
        }
        self
    }

    /// [`SyntaxTree::consume_definition()`] for the `Query` type.
    pub fn consume_query(&mut self, donor: &mut SyntaxTree) -> &mut Self {
        self.consume_definition(donor, DEFAULT_CONSUMED_DEFINITION)
    }

    /// Consume each of `donor`'s root operation types (Query, Mutation,
    /// Subscription, as reported by compiling `donor`) into this tree.
    ///
    /// If `donor` does not compile, the failure is logged and neither tree
    /// changes.
    pub fn consume_all_executable_types(&mut self, donor: &mut SyntaxTree) -> &mut Self {
        // Tolerant consumption reports failures through the log, never as an
        // `Err`.
        let _ = self.consume_all_executable_types_impl(donor, Strictness::Tolerant);
        self
    }

    /// Strict form of [`SyntaxTree::consume_all_executable_types()`].
    pub fn try_consume_all_executable_types(
        &mut self,
        donor: &mut SyntaxTree,
    ) -> Result<&mut Self> {
        self.consume_all_executable_types_impl(donor, Strictness::Strict)?;
        Ok(self)
    }

    fn consume_all_executable_types_impl(
        &mut self,
        donor: &mut SyntaxTree,
        strictness: Strictness,
    ) -> Result<()> {
        let compiled = ExecutableSchema::build(donor.document())
            .map_err(SyntaxTreeError::from);
        let Some(schema) = strictness.settle(compiled, "executable type consumption")? else {
            return Ok(());
        };

        let root_type_names: Vec<String> = schema.root_operation_type_names()
            .into_iter()
            .map(str::to_string)
            .collect();
        for type_name in root_type_names {
            self.consume_definition(donor, NameMatcher::Exact(type_name));
        }
        Ok(())
    }
}

/// Index of the first type definition (extensions and directives excluded)
/// whose name matches, mirroring [`SyntaxTree::find()`].
fn position_by_name(
    definitions: &[ast::schema::Definition],
    matcher: &NameMatcher,
) -> Option<usize> {
    definitions.iter().position(|def| match def {
        ast::schema::Definition::TypeDefinition(type_def) =>
            matcher.matches(ast::type_definition_name(type_def)),
        _ => false,
    })
}

fn merge_definitions(
    mut ours: Vec<ast::schema::Definition>,
    theirs: Vec<ast::schema::Definition>,
) -> Vec<ast::schema::Definition> {
    let mut seen: HashMap<MergeKey, usize> = HashMap::new();
    for (idx, def) in ours.iter().enumerate() {
        seen.entry(MergeKey::of(def)).or_insert(idx);
    }

    for their_def in theirs {
        let key = MergeKey::of(&their_def);
        match seen.get(&key) {
            Some(&idx) => merge_definition(&mut ours[idx], their_def),
            None => {
                seen.insert(key, ours.len());
                ours.push(their_def);
            },
        }
    }
    ours
}

/// Which existing definition an incoming one is merged with.
///
/// Type definitions, type extensions and directive definitions each have a
/// namespace of their own. Unnamed definitions (`schema { ... }`) share the
/// `None` name, so they meet each other.
#[derive(Debug, Eq, Hash, PartialEq)]
struct MergeKey {
    namespace: Namespace,
    name: Option<String>,
}
impl MergeKey {
    fn of(def: &ast::schema::Definition) -> Self {
        let namespace = match def {
            ast::schema::Definition::DirectiveDefinition(_) => Namespace::Directive,
            ast::schema::Definition::SchemaDefinition(_) => Namespace::Schema,
            ast::schema::Definition::TypeDefinition(_) => Namespace::Type,
            ast::schema::Definition::TypeExtension(_) => Namespace::TypeExtension,
        };
        Self {
            namespace,
            name: ast::definition_name(def).map(str::to_string),
        }
    }
}

#[derive(Debug, Eq, Hash, PartialEq)]
enum Namespace {
    Directive,
    Schema,
    Type,
    TypeExtension,
}

fn merge_definition(
    ours: &mut ast::schema::Definition,
    theirs: ast::schema::Definition,
) {
    use ast::schema::Definition as Def;
    use ast::schema::TypeDefinition as TypeDef;
    use ast::schema::TypeExtension as TypeExt;

    let our_kind = DefinitionKind::from(&*ours);
    let their_kind = DefinitionKind::from(&theirs);
    if our_kind != their_kind {
        log::debug!(
            "Replacing {our_kind} `{}` with a {their_kind} of the same name.",
            ast::definition_name(ours).unwrap_or("schema"),
        );
        *ours = theirs;
        return;
    }

    match (ours, theirs) {
        (Def::TypeDefinition(TypeDef::Object(ours)), Def::TypeDefinition(TypeDef::Object(theirs))) => {
            ours.implements_interfaces.extend(theirs.implements_interfaces);
            ours.directives.extend(theirs.directives);
            ours.fields.extend(theirs.fields);
        },

        (Def::TypeDefinition(TypeDef::Interface(ours)), Def::TypeDefinition(TypeDef::Interface(theirs))) => {
            ours.implements_interfaces.extend(theirs.implements_interfaces);
            ours.directives.extend(theirs.directives);
            ours.fields.extend(theirs.fields);
        },

        (Def::TypeDefinition(TypeDef::InputObject(ours)), Def::TypeDefinition(TypeDef::InputObject(theirs))) => {
            ours.directives.extend(theirs.directives);
            ours.fields.extend(theirs.fields);
        },

        (Def::TypeDefinition(TypeDef::Enum(ours)), Def::TypeDefinition(TypeDef::Enum(theirs))) =>
            union_enum_values(&mut ours.values, theirs.values),

        (Def::TypeExtension(TypeExt::Object(ours)), Def::TypeExtension(TypeExt::Object(theirs))) => {
            ours.implements_interfaces.extend(theirs.implements_interfaces);
            ours.directives.extend(theirs.directives);
            ours.fields.extend(theirs.fields);
        },

        (Def::TypeExtension(TypeExt::Interface(ours)), Def::TypeExtension(TypeExt::Interface(theirs))) => {
            ours.implements_interfaces.extend(theirs.implements_interfaces);
            ours.directives.extend(theirs.directives);
            ours.fields.extend(theirs.fields);
        },

        (Def::TypeExtension(TypeExt::InputObject(ours)), Def::TypeExtension(TypeExt::InputObject(theirs))) => {
            ours.directives.extend(theirs.directives);
            ours.fields.extend(theirs.fields);
        },

        (Def::TypeExtension(TypeExt::Enum(ours)), Def::TypeExtension(TypeExt::Enum(theirs))) =>
            union_enum_values(&mut ours.values, theirs.values),

        // TODO: Unions could merge member lists the way enums merge values;
        // until then the later union (or scalar, directive, schema
        // definition) replaces the earlier one.
        (ours, theirs) => *ours = theirs,
    }
}

fn union_enum_values(
    ours: &mut Vec<ast::schema::EnumValue>,
    theirs: Vec<ast::schema::EnumValue>,
) {
    let mut seen = HashSet::new();
    *ours = std::mem::take(ours)
        .into_iter()
        .chain(theirs)
        .filter(|value| seen.insert(value.name.to_string()))
        .collect();
}
