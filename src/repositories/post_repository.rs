use diesel::prelude::*;
use diesel::SqliteConnection;

use crate::{
    database::StoreError,
    models::{ NewPost, Post, UpdatePost },
    schema::posts,
};

/// Single-statement access to the `posts` table. Every write commits on its own.
pub struct PostRepository;

impl PostRepository {
    // LIST POSTS, NEWEST FIRST
    pub fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Post>, StoreError> {
        // `created` has one-second resolution, so id breaks ties
        let all_posts = posts::table
            .order((posts::created.desc(), posts::id.desc()))
            .select(Post::as_select())
            .load::<Post>(conn)?;

        Ok(all_posts)
    }

    // GET POST BY ID
    pub fn get(conn: &mut SqliteConnection, post_id: i64) -> Result<Option<Post>, StoreError> {
        let post = posts::table
            .find(post_id)
            .select(Post::as_select())
            .first::<Post>(conn)
            .optional()?;

        Ok(post)
    }

    // CREATE POST
    pub fn insert(conn: &mut SqliteConnection, new_post: &NewPost) -> Result<Post, StoreError> {
        let post = diesel
            ::insert_into(posts::table)
            .values(new_post)
            .returning(Post::as_returning())
            .get_result(conn)?;

        Ok(post)
    }

    // UPDATE POST: returns the number of rows touched, 0 for an unknown id
    pub fn update(
        conn: &mut SqliteConnection,
        post_id: i64,
        changes: &UpdatePost
    ) -> Result<usize, StoreError> {
        let affected = diesel::update(posts::table.find(post_id)).set(changes).execute(conn)?;

        Ok(affected)
    }

    // DELETE POST: returns the number of rows removed, 0 for an unknown id
    pub fn delete(conn: &mut SqliteConnection, post_id: i64) -> Result<usize, StoreError> {
        let affected = diesel::delete(posts::table.find(post_id)).execute(conn)?;

        Ok(affected)
    }

    pub fn count(conn: &mut SqliteConnection) -> Result<i64, StoreError> {
        let total = posts::table.count().get_result::<i64>(conn)?;

        Ok(total)
    }
}
