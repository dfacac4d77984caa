//! Integration tests for `#[derive(Fields)]`.

use nmfmt::{Fields, Value, flatten};

/// Test basic `#[derive(Fields)]` usage.
#[derive(Fields)]
pub struct Player {
    pub name: String,
    pub age: i32,
    secret: String,
}

impl Player {
    fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
            secret: "hidden".into(),
        }
    }
}

#[test]
fn test_public_fields_only() {
    let player = Player::new("Kim", 22);
    assert_eq!(player.secret, "hidden");
    assert_eq!(
        player.fields(),
        vec![("name", Value::from("Kim")), ("age", Value::Int(22))]
    );

    assert_eq!(
        nmfmt::sprintf("$name is $age years old. $secret", &player.fields()).unwrap(),
        "Kim is 22 years old. <nil>"
    );
}

/// Test `#[derive(Fields)]` with rename and skip.
#[derive(Fields)]
pub struct Account {
    #[nmfmt(rename = "ID")]
    pub id: u64,
    #[nmfmt(skip)]
    pub password: String,
    pub(crate) internal: bool,
    pub tags: Vec<String>,
    pub nickname: Option<String>,
}

#[test]
fn test_field_attributes() {
    let account = Account {
        id: 7,
        password: "hunter2".into(),
        internal: true,
        tags: vec!["a".into(), "b".into()],
        nickname: None,
    };
    assert!(account.internal);
    assert!(!account.password.is_empty());

    let fields = account.fields();
    let names: Vec<_> = fields.iter().map(|(name, _)| *name).collect();
    assert_eq!(names, vec!["ID", "tags", "nickname"]);
    assert_eq!(fields[0].1, Value::Uint(7));
    assert_eq!(
        fields[1].1,
        Value::List(vec![Value::from("a"), Value::from("b")])
    );
    assert_eq!(fields[2].1, Value::Nil);

    assert_eq!(
        nmfmt::sprintf("#$ID $tags:q ($nickname)", &fields).unwrap(),
        r#"#7 ["a" "b"] (<nil>)"#
    );
}

/// Test `#[derive(Fields)]` on a generic struct.
#[derive(Fields)]
pub struct Labeled<T: nmfmt::ToValue> {
    pub label: &'static str,
    pub value: T,
}

#[test]
fn test_generic_struct() {
    let labeled = Labeled {
        label: "ratio",
        value: 0.5f64,
    };
    assert_eq!(
        nmfmt::sprintf("$label=${value:.2f}", &labeled.fields()).unwrap(),
        "ratio=0.50"
    );
}

#[derive(Fields)]
pub struct Birth {
    pub year: i32,
    pub month: u8,
    pub name: String,
}

#[test]
fn test_flatten_first_record_wins() {
    let player = Player::new("Player", 23);
    let birth = Birth {
        year: 2001,
        month: 4,
        name: "ignored".into(),
    };

    let args = flatten(&[&player, &birth]);
    assert_eq!(
        nmfmt::sprintf(
            "$name's name is $name:q. $name's age is $age, and was born in $year.",
            &args
        )
        .unwrap(),
        r#"Player's name is "Player". Player's age is 23, and was born in 2001."#
    );
}

#[test]
fn test_struct_and_positional_agree() {
    use nmfmt::{Engine, Printf};

    let args = flatten(&[&Player::new("Player", 123)]);
    let mut want = String::new();
    Printf
        .format(
            &mut want,
            "%[1]v's age is %[2]d",
            &[Value::from("Player"), Value::from(123)],
        )
        .unwrap();
    assert_eq!(nmfmt::sprintf("$name's age is $age", &args).unwrap(), want);
}
