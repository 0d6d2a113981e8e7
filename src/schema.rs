diesel::table! {
    posts (id) {
        id -> BigInt,
        created -> Timestamp,
        title -> Text,
        content -> Text,
    }
}
