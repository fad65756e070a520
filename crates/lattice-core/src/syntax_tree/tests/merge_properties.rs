use crate::syntax_tree::SyntaxTree;
use proptest::prelude::*;

const BASE_TYPES: [&str; 5] = ["Boolean", "Float", "ID", "Int", "String"];

fn field_sdl() -> impl Strategy<Value = String> {
    ("f_[a-z]{1,6}", 0..BASE_TYPES.len(), 0..6usize).prop_map(|(name, base_idx, wrapping)| {
        let base = BASE_TYPES[base_idx];
        let ty = match wrapping {
            0 => base.to_string(),
            1 => format!("{base}!"),
            2 => format!("[{base}]"),
            3 => format!("[{base}!]"),
            4 => format!("[{base}]!"),
            _ => format!("[{base}!]!"),
        };
        format!("{name}: {ty}")
    })
}

fn object_sdl() -> impl Strategy<Value = String> {
    ("T[a-z]{0,4}", prop::collection::vec(field_sdl(), 1..5))
        .prop_map(|(name, fields)| format!("type {name} {{ {} }}", fields.join(" ")))
}

fn document_sdl() -> impl Strategy<Value = String> {
    prop::collection::vec(object_sdl(), 0..6).prop_map(|types| types.join("\n"))
}

proptest! {
    #[test]
    fn appending_an_empty_document_keeps_the_outline(sdl in document_sdl()) {
        let Ok(mut tree) = SyntaxTree::from_sdl(&sdl) else {
            return Err(TestCaseError::fail(format!("generated SDL failed to parse: {sdl}")));
        };
        let before = tree.outline();

        tree.append_definitions(SyntaxTree::empty_document());
        prop_assert_eq!(tree.outline(), before.clone());

        tree.append_definitions("");
        prop_assert_eq!(tree.outline(), before);
    }

    #[test]
    fn printed_sdl_reparses_to_the_same_outline(sdl in document_sdl()) {
        let Ok(tree) = SyntaxTree::from_sdl(&sdl) else {
            return Err(TestCaseError::fail(format!("generated SDL failed to parse: {sdl}")));
        };
        let printed = tree.to_sdl();
        prop_assert!(printed.is_ok());

        let reparsed = printed.ok().and_then(|printed| SyntaxTree::from_source(printed));
        prop_assert_eq!(reparsed.map(|tree| tree.outline()), Some(tree.outline()));
    }

    #[test]
    fn merging_into_an_empty_tree_adds_every_object(sdl in document_sdl()) {
        let Ok(tree) = SyntaxTree::from_sdl(&sdl) else {
            return Err(TestCaseError::fail(format!("generated SDL failed to parse: {sdl}")));
        };
        let mut merged = SyntaxTree::empty_document();
        merged.append_definitions(&tree);

        let expected: Vec<_> = tree.outline().types.keys().cloned().collect();
        let actual: Vec<_> = merged.outline().types.keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }
}
