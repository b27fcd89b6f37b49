use std::collections::{BTreeMap, HashMap};

use fieldmask::Instance;

#[derive(Instance, Clone, Default, PartialEq)]
struct Test {
    test: i32,
    b: bool,
}

#[derive(Instance, Clone, Default, PartialEq)]
#[instance(rename = "tests.Foo")]
struct Foo {
    test: Option<Test>,
    bar: i64,
    string: String,
    #[field(oneof)]
    e: Option<TestE>,
    vec_test: Vec<Test>,
    map_test: HashMap<String, Test>,
    ordered: BTreeMap<u32, String>,
    #[field(rename = "type")]
    kind: u32,
    r#match: bool,
    #[field(skip)]
    cache: std::cell::Cell<u8>,
}

#[derive(Instance, Clone, PartialEq)]
enum TestE {
    Foo(i32),
    StructTest(Box<Test>),
    #[field(rename = "other")]
    Bar(String),
}

#[derive(Instance, Clone, Default, PartialEq)]
struct Generic<T: fieldmask::Reflect> {
    inner: Option<T>,
}

fn main() {}
