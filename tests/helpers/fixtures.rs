//! Input documents for merge tests.
//!
//! Two small worlds: an official export (positional parameter ids,
//! placeholder class names) and a legacy export (method-derived parameter
//! ids, constructor side-table).

use namebridge::curated::CuratedDatabase;
use namebridge::export::write_entries;
use namebridge::mapping::MappingFile;
use namebridge::merge::{ConstructorTable, ExportMode, MergeInputs};

// ============================================================================
// OFFICIAL EXPORT
// ============================================================================

pub const OFFICIAL_JOINED: &str = "\
tsrg2 obf srg id
net/ net/ net/
net/example/ net/example/ net/example/
a net/minecraft/src/C_1_ 1
\ta f_10_ 10
\tb f_11_ 11
\ta ()V m_20_ 20
\tb (IJLjava/lang/String;)V m_21_ 21
\t\t1 o p_21_0_ 30
\t\t2 p p_21_1_ 31
\t\t4 q p_21_2_ 32
\tc (Lb;)V m_22_ 22
\t\tstatic
\t\t0 o p_22_0_ 33
\td ()I m_23_ 23
\t<init> (I)V <init> 24
\t\t1 o p_24_0_ 35
b net/minecraft/src/C_2_ 2
\ta ()Ljava/lang/String; name 25
";

pub const OFFICIAL_CLIENT: &str = "\
# compiler: R8
net.example.Foo -> a:
    int count -> a
    java.lang.String label -> b
    1:3:void doThing() -> a
    4:9:void apply(int,long,java.lang.String) -> b
    void accept(net.example.Bar) -> c
    int size() -> d
    void <init>(int) -> <init>
net.example.Bar -> b:
    java.lang.String name() -> a
";

pub const OFFICIAL_CURATED: &str = r#"{
  "version": "1.1.0",
  "packages": [{ "name": "net/example", "javadoc": ["Example package."] }],
  "classes": [
    {
      "name": "net/example/Foo",
      "javadoc": ["A foo.", "Second line."],
      "fields": [
        { "name": "count", "descriptor": "I", "javadoc": ["How many."] },
        { "name": "label", "descriptor": "Ljava/lang/String;" }
      ],
      "methods": [
        { "name": "doThing", "descriptor": "()V", "javadoc": "does a thing" },
        {
          "name": "apply",
          "descriptor": "(IJLjava/lang/String;)V",
          "parameters": [
            { "index": 1, "name": "amount" },
            { "index": 2, "name": "duration", "javadoc": "In ticks." },
            { "index": 4, "name": "label" }
          ]
        },
        {
          "name": "accept",
          "descriptor": "(Lnet/example/Bar;)V",
          "parameters": [{ "index": 0, "name": "bar" }]
        },
        {
          "name": "size",
          "descriptor": "()I",
          "parameters": [{ "index": 1, "name": "ghost", "javadoc": "Never emitted." }]
        },
        {
          "name": "<init>",
          "descriptor": "(I)V",
          "parameters": [{ "index": 1, "name": "initial" }]
        }
      ]
    },
    {
      "name": "net/example/Bar",
      "methods": [
        { "name": "name", "descriptor": "()Ljava/lang/String;", "javadoc": ["The name."] }
      ]
    }
  ]
}"#;

pub fn official_inputs() -> MergeInputs {
    MergeInputs::new(
        load(OFFICIAL_JOINED),
        load(OFFICIAL_CLIENT),
        curated(OFFICIAL_CURATED),
        ExportMode::Official,
    )
}

// ============================================================================
// LEGACY EXPORT
// ============================================================================

pub const LEGACY_JOINED: &str = "\
net/minecraft/util/ net/minecraft/util/
a net/minecraft/util/Widget
\ta field_100_a
\ta (I)V func_123_a
\tb (Ljava/lang/Runnable;)V doStuff
\tc ()V func_124_c
";

pub const LEGACY_CLIENT: &str = "\
net.example.Widget -> a:
    int size -> a
    void resize(int) -> a
    void doStuff(java.lang.Runnable) -> b
    void reset() -> c
    void <init>(int,java.lang.String) -> <init>
";

pub const LEGACY_CONSTRUCTORS: &str = "\
1001 net/minecraft/util/Widget (ILjava/lang/String;)V
1002 net/minecraft/util/Widget ()V
";

pub const LEGACY_CURATED: &str = r#"{
  "version": "1.0.0",
  "classes": [
    {
      "name": "net/example/Widget",
      "methods": [
        {
          "name": "resize",
          "descriptor": "(I)V",
          "parameters": [{ "index": 1, "name": "newSize" }]
        },
        {
          "name": "doStuff",
          "descriptor": "(Ljava/lang/Runnable;)V",
          "parameters": [{ "index": 1, "name": "task" }]
        },
        { "name": "reset", "descriptor": "()V", "javadoc": ["Resets."] },
        {
          "name": "<init>",
          "descriptor": "(ILjava/lang/String;)V",
          "javadoc": ["Creates a widget."],
          "parameters": [
            { "index": 1, "name": "width" },
            { "index": 2, "name": "label", "javadoc": "Shown on screen." }
          ]
        }
      ]
    }
  ]
}"#;

pub fn legacy_inputs() -> MergeInputs {
    MergeInputs::new(
        load(LEGACY_JOINED),
        load(LEGACY_CLIENT),
        curated(LEGACY_CURATED),
        ExportMode::Legacy,
    )
    .with_constructors(ConstructorTable::parse(LEGACY_CONSTRUCTORS))
}

// ============================================================================
// ARCHIVES
// ============================================================================

/// An intermediate export archive around a joined mapping.
pub fn export_archive(official: bool, joined: &str, constructors: Option<&str>) -> Vec<u8> {
    let config = if official {
        r#"{"spec":3,"official":true,"data":{"mappings":"config/joined.tsrg"}}"#
    } else {
        r#"{"spec":1,"data":{"mappings":"config/joined.tsrg","constructors":"config/constructors.txt"}}"#
    };
    let mut entries = vec![
        ("config.json", config.as_bytes()),
        ("config/joined.tsrg", joined.as_bytes()),
    ];
    if let Some(constructors) = constructors {
        entries.push(("config/constructors.txt", constructors.as_bytes()));
    }
    write_entries(entries).unwrap()
}

/// A curated archive holding `json` as its database.
pub fn curated_archive(json: &str) -> Vec<u8> {
    write_entries([("parchment.json", json.as_bytes())]).unwrap()
}

pub fn load(text: &str) -> MappingFile {
    MappingFile::load(text.as_bytes()).unwrap()
}

pub fn curated(json: &str) -> CuratedDatabase {
    CuratedDatabase::from_json(json.as_bytes()).unwrap()
}
