use crate::outline::OutlineArgument;
use crate::syntax_tree::SyntaxTree;
use crate::syntax_tree::SyntaxTreeError;

type Result<T> = std::result::Result<T, SyntaxTreeError>;

#[test]
fn planet_fields() -> Result<()> {
    let tree = SyntaxTree::from_sdl("type Planet { id: ID name: String sector: Float }")?;
    let outline = tree.outline();

    assert_eq!(
        outline.field_types("Planet"),
        Some(vec![("id", Some("ID")), ("name", Some("String")), ("sector", Some("Float"))]),
    );
    let Some(planet) = outline.types.get("Planet") else {
        panic!("expected Planet in the outline");
    };
    assert!(planet.values().all(|field| field.args.is_empty()));
    Ok(())
}

#[test]
fn every_bucket_is_filled() -> Result<()> {
    let tree = SyntaxTree::from_sdl(concat!(
        "interface Body { id: ID! }\n",
        "type Planet implements Body { id: ID! moons(first: Int!, tags: [String]): [Moon] }\n",
        "type Moon { id: ID! }\n",
        "enum Sector { INNER OUTER }\n",
        "union Thing = Planet | Moon\n",
        "input PlanetFilter { ids: [ID!]! }\n",
        "scalar Date\n",
        "extend type Moon { planet: Planet }\n",
        "extend union Thing = Body\n",
        "extend enum Sector { RIM }\n",
    ))?;
    let outline = tree.outline();

    assert_eq!(outline.interfaces.keys().collect::<Vec<_>>(), vec!["Body"]);
    assert_eq!(outline.types.keys().collect::<Vec<_>>(), vec!["Planet", "Moon"]);
    assert_eq!(
        outline.field_types("Moon"),
        Some(vec![("id", Some("ID")), ("planet", Some("Planet"))]),
    );

    let Some(moons) = outline.types.get("Planet").and_then(|fields| fields.get("moons")) else {
        panic!("expected Planet.moons in the outline");
    };
    assert!(moons.array);
    assert!(!moons.required);
    assert_eq!(moons.args, vec![
        OutlineArgument {
            name: "first".to_string(),
            type_name: Some("Int".to_string()),
            array: false,
            required: true,
        },
        OutlineArgument {
            name: "tags".to_string(),
            type_name: Some("String".to_string()),
            array: true,
            required: false,
        },
    ]);

    let sector = outline.enums.get("Sector");
    assert_eq!(
        sector.map(|values| values.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect::<Vec<_>>()),
        Some(vec![("INNER", "INNER"), ("OUTER", "OUTER"), ("RIM", "RIM")]),
    );
    assert_eq!(
        outline.unions.get("Thing"),
        Some(&vec!["Planet".to_string(), "Moon".to_string(), "Body".to_string()]),
    );
    assert!(outline.inputs.get("PlanetFilter")
        .and_then(|fields| fields.get("ids"))
        .is_some_and(|ids| ids.array && ids.required && ids.args.is_empty()));
    assert_eq!(outline.scalars, vec!["Date"]);
    Ok(())
}

#[test]
fn defines_skips_inputs() -> Result<()> {
    let tree = SyntaxTree::from_sdl("input Filter { a: Int }\nscalar Date\nenum Sector { A }")?;
    let outline = tree.outline();

    assert!(outline.defines("Date"));
    assert!(outline.defines("Sector"));
    assert!(!outline.defines("Filter"));
    assert_eq!(outline.field_types("Filter"), Some(vec![("a", Some("Int"))]));
    assert_eq!(outline.field_types("Missing"), None);
    Ok(())
}

#[test]
fn deeply_nested_types_have_no_base_name() -> Result<()> {
    let tree = SyntaxTree::from_sdl("type Grid { cells: [[Int]] }")?;
    assert_eq!(tree.outline().field_types("Grid"), Some(vec![("cells", None)]));
    Ok(())
}

#[test]
fn outline_is_a_snapshot() -> Result<()> {
    let mut tree = SyntaxTree::from_sdl("type Query { a: Int }")?;
    let mut outline = tree.outline();
    outline.scalars.push("Date".to_string());
    assert!(tree.outline().scalars.is_empty());

    tree.try_append_definitions("type Query { b: Int }")?;
    assert_eq!(outline.types.get("Query").map(|fields| fields.len()), Some(1));
    assert_eq!(tree.outline().types.get("Query").map(|fields| fields.len()), Some(2));
    Ok(())
}

#[test]
fn serializes_as_plain_json() -> Result<()> {
    let tree = SyntaxTree::from_sdl("type Planet { id: ID! }\nunion Thing = Planet")?;
    let json = match serde_json::to_value(tree.outline()) {
        Ok(json) => json,
        Err(err) => panic!("failed to serialize: {err}"),
    };

    assert_eq!(json, serde_json::json!({
        "interfaces": {},
        "types": {
            "Planet": {
                "id": {"name": "id", "type": "ID", "array": false, "required": true, "args": []},
            },
        },
        "enums": {},
        "unions": {"Thing": ["Planet"]},
        "inputs": {},
        "scalars": [],
    }));
    Ok(())
}
