use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{ Deserialize, Serialize };
use crate::schema::posts;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Serialize)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Post {
    pub id: i64,
    pub created: NaiveDateTime,
    pub title: String,
    pub content: String,
}

#[derive(Insertable, Deserialize, Clone)]
#[diesel(table_name = posts)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

// title and content are always overwritten together
#[derive(AsChangeset, Deserialize, Clone)]
#[diesel(table_name = posts)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
}
