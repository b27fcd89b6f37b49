use fieldmask::{FieldKind, Instance, MessageInstance, OneofInstance, SmolStr};

#[derive(Instance, Clone, Default, PartialEq)]
struct User {
    user_id: i64,
}

#[derive(Instance, Clone, PartialEq)]
enum Changed {
    User(User),
    EventId(i64),
}

#[derive(Instance, Clone, Default, PartialEq)]
struct Event {
    #[field(oneof)]
    changed: Option<Changed>,
}

fn main() {
    let mut event = Event {
        changed: Some(Changed::EventId(1)),
    };
    assert_eq!(event.populated_fields(), vec![SmolStr::new("event_id")]);
    assert_eq!(
        event.field_mut("event_id").map(|f| f.kind()),
        Some(FieldKind::Scalar)
    );
    assert!(event.field_mut("user").is_none());

    event.changed = Some(Changed::User(User { user_id: 2 }));
    assert_eq!(
        event.changed.as_ref().map(OneofInstance::field_name),
        Some("user".into())
    );
    assert_eq!(
        event.field_mut("user").map(|f| f.kind()),
        Some(FieldKind::Message)
    );
    event.clear_field("event_id");
    assert!(event.changed.is_some());
    event.clear_field("user");
    assert!(event.changed.is_none());
}
