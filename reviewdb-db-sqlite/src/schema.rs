///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    product_review (id) {
        id -> BigInt,
        subject_id -> BigInt,
        author_id -> BigInt,
        comment -> Text,
        rating -> SmallInt,
        created_at -> BigInt,
    }
}

table! {
    service_review (id) {
        id -> BigInt,
        subject_id -> BigInt,
        author_id -> BigInt,
        comment -> Text,
        rating -> SmallInt,
        created_at -> BigInt,
    }
}

table! {
    team_review (id) {
        id -> BigInt,
        subject_id -> BigInt,
        author_id -> BigInt,
        comment -> Text,
        rating -> SmallInt,
        created_at -> BigInt,
    }
}

allow_tables_to_appear_in_same_query!(product_review, service_review, team_review);
