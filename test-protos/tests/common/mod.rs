#![allow(dead_code)]

use prost::Message;
use std::collections::HashMap;
use test_protos::*;

pub fn user() -> User {
    User {
        user_id: 1,
        name: "user name".to_string(),
    }
}

pub fn photo(photo_id: i64, path: &str, width: i32, height: i32) -> Photo {
    Photo {
        photo_id,
        path: path.to_string(),
        dimensions: Some(Dimensions { width, height }),
    }
}

pub fn tags(keys: &[&str]) -> HashMap<String, String> {
    keys.iter()
        .map(|k| (k.to_string(), k.trim_start_matches('t').to_string()))
        .collect()
}

pub fn attributes(entries: &[(&str, &[&str])]) -> HashMap<String, Attribute> {
    entries
        .iter()
        .map(|(key, keys)| (key.to_string(), Attribute { tags: tags(keys) }))
        .collect()
}

pub const ALL_TAGS: &[&str] = &["t1", "t2", "t3"];

/// A profile whose attributes `a1`, `a2` and `a3` each carry the tags `t1`, `t2` and `t3`.
pub fn attribute_profile() -> Profile {
    Profile {
        attributes: attributes(&[("a1", ALL_TAGS), ("a2", ALL_TAGS), ("a3", ALL_TAGS)]),
        ..Profile::default()
    }
}

pub fn full_profile() -> Profile {
    Profile {
        user: Some(user()),
        photo: Some(photo(2, "photo path", 100, 120)),
        login_timestamps: vec![1, 2],
        ..Profile::default()
    }
}

pub fn gallery_profile() -> Profile {
    Profile {
        photo: Some(Photo {
            photo_id: 4,
            path: "photo path".to_string(),
            dimensions: None,
        }),
        gallery: vec![photo(1, "path 1", 100, 200), photo(2, "path 2", 300, 400)],
        ..Profile::default()
    }
}

pub fn profile_event(profile: Profile) -> Event {
    Event {
        event_id: 1,
        changed: Some(event::Changed::Profile(profile)),
    }
}

pub fn details_any() -> ::prost_types::Any {
    let result = SearchResult {
        data: b"bytes".to_vec(),
        next_token: 1,
    };
    let mut value = Vec::new();
    result.encode(&mut value).expect("failed to encode");
    ::prost_types::Any {
        type_url: "type.googleapis.com/fieldmask.tests.SearchResult".to_string(),
        value,
    }
}

pub fn encode<M: Message>(msg: &M) -> Vec<u8> {
    let mut buf = Vec::with_capacity(msg.encoded_len());
    msg.encode(&mut buf).expect("failed to encode");
    buf
}
