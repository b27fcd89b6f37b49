mod common;

use common::*;
use test_protos::*;

#[test]
fn empty_mask_keeps_everything() {
    let mut event = profile_event(full_profile());
    let expected = event.clone();
    fieldmask::prune(&mut event, Vec::<&str>::new());
    assert_eq!(event, expected);
}

#[test]
fn all_root_fields() {
    let mut profile = full_profile();
    fieldmask::prune(&mut profile, &["user", "photo", "login_timestamps"]);
    assert_eq!(profile, Profile::default());
}

#[test]
fn single_root_field() {
    let mut profile = full_profile();
    fieldmask::prune(&mut profile, &["user"]);
    assert_eq!(
        profile,
        Profile {
            user: None,
            ..full_profile()
        }
    );
}

#[test]
fn nested_fields() {
    let mut profile = full_profile();
    fieldmask::prune(&mut profile, &["user.name", "photo.dimensions.width"]);
    assert_eq!(
        profile,
        Profile {
            user: Some(User {
                user_id: 1,
                name: String::new(),
            }),
            photo: Some(photo(2, "photo path", 0, 120)),
            login_timestamps: vec![1, 2],
            ..Profile::default()
        }
    );
}

#[test]
fn oneof_member() {
    let mut event = Event {
        event_id: 1,
        changed: Some(event::Changed::User(user())),
    };
    fieldmask::prune(&mut event, &["user"]);
    assert_eq!(
        event,
        Event {
            event_id: 1,
            changed: None,
        }
    );
}

#[test]
fn unset_oneof_member_is_ignored() {
    let mut event = Event {
        event_id: 1,
        changed: Some(event::Changed::User(user())),
    };
    let expected = event.clone();
    fieldmask::prune(&mut event, &["photo", "details"]);
    assert_eq!(event, expected);
}

#[test]
fn nested_oneof_member() {
    let mut event = profile_event(full_profile());
    fieldmask::prune(
        &mut event,
        &["profile.photo.dimensions", "profile.user.user_id", "profile.login_timestamps"],
    );
    assert_eq!(
        event,
        Event {
            event_id: 1,
            changed: Some(event::Changed::Profile(Profile {
                user: Some(User {
                    user_id: 0,
                    name: "user name".to_string(),
                }),
                photo: Some(Photo {
                    photo_id: 2,
                    path: "photo path".to_string(),
                    dimensions: None,
                }),
                ..Profile::default()
            })),
        }
    );
}

#[test]
fn any_in_oneof() {
    let mut event = Event {
        event_id: 1,
        changed: Some(event::Changed::Details(details_any())),
    };
    fieldmask::prune(&mut event, &["details"]);
    assert_eq!(
        event,
        Event {
            event_id: 1,
            changed: None,
        }
    );
}

#[test]
fn any_fields() {
    let mut event = Event {
        event_id: 1,
        changed: Some(event::Changed::Details(details_any())),
    };
    fieldmask::prune(&mut event, &["details.value"]);
    assert_eq!(
        event,
        Event {
            event_id: 1,
            changed: Some(event::Changed::Details(prost_types::Any {
                type_url: details_any().type_url,
                value: Vec::new(),
            })),
        }
    );
}

#[test]
fn repeated_nested_fields() {
    let mut event = profile_event(gallery_profile());
    fieldmask::prune(
        &mut event,
        &["profile.gallery.photo_id", "profile.gallery.dimensions.height"],
    );
    let thin = |path: &str, width| Photo {
        photo_id: 0,
        path: path.to_string(),
        dimensions: Some(Dimensions { width, height: 0 }),
    };
    assert_eq!(
        event,
        Event {
            event_id: 1,
            changed: Some(event::Changed::Profile(Profile {
                gallery: vec![thin("path 1", 100), thin("path 2", 300)],
                ..gallery_profile()
            })),
        }
    );
}

#[test]
fn repeated_field() {
    let mut event = profile_event(gallery_profile());
    fieldmask::prune(&mut event, &["profile.gallery"]);
    assert_eq!(
        event,
        Event {
            event_id: 1,
            changed: Some(event::Changed::Profile(Profile {
                gallery: Vec::new(),
                ..gallery_profile()
            })),
        }
    );
}

#[test]
fn map_entries() {
    let mut event = profile_event(attribute_profile());
    fieldmask::prune(
        &mut event,
        &[
            "profile.attributes.a1",
            "profile.attributes.a2.tags.t2",
            "profile.attributes.aNonExistant",
        ],
    );
    assert_eq!(
        event,
        Event {
            event_id: 1,
            changed: Some(event::Changed::Profile(Profile {
                attributes: attributes(&[("a2", &["t1", "t3"][..]), ("a3", ALL_TAGS)]),
                ..Profile::default()
            })),
        }
    );
}

#[test]
fn scalar_map_values_under_deeper_paths_are_removed() {
    let mut profile = Profile {
        flags: vec![(true, "on".to_string()), (false, "off".to_string())]
            .into_iter()
            .collect(),
        ..Profile::default()
    };
    fieldmask::prune(&mut profile, &["flags.false.anything"]);
    assert_eq!(profile.flags.len(), 1);
    assert_eq!(profile.flags.get(&true).map(String::as_str), Some("on"));
}

#[test]
fn pruned_scalars_are_not_encoded() {
    let mut result = SearchResult {
        data: b"bytes".to_vec(),
        next_token: 7,
    };
    fieldmask::prune(&mut result, &["data"]);
    assert_eq!(
        encode(&result),
        encode(&SearchResult {
            data: Vec::new(),
            next_token: 7,
        })
    );
}
