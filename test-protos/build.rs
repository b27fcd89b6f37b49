const MESSAGES: &[&str] = &[
    "User",
    "Photo",
    "Dimensions",
    "Attribute",
    "Profile",
    "SearchResult",
    "Event",
];

const EVENT_CHANGED: &[&str] = &["user", "photo", "details", "profile", "photo_2d"];

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=proto/test.proto");

    let mut config = prost_build::Config::new();
    // The most specific path wins, so the oneof enum and its members need entries of their own.
    config.type_attribute(".fieldmask.tests.Event.changed", "#[derive(::fieldmask::Instance)]");
    for member in EVENT_CHANGED {
        config.field_attribute(
            format!(".fieldmask.tests.Event.changed.{}", member),
            format!("#[field(rename = \"{}\")]", member),
        );
    }
    config.field_attribute(".fieldmask.tests.Event.changed", "#[field(oneof)]");
    for message in MESSAGES {
        config.type_attribute(
            format!(".fieldmask.tests.{}", message),
            format!(
                "#[derive(::fieldmask::Instance)]\n#[instance(rename = \"fieldmask.tests.{}\")]",
                message
            ),
        );
    }
    config.compile_protos(&["proto/test.proto"], &["proto/"])
}
