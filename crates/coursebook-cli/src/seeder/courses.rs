//! Course seeding functionality.

use coursebook_models::{CourseId, UserId};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence, Words};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::CourseSeed;

/// Generates `per_owner` courses for every owner.
pub fn generate_courses(owners: &[UserId], per_owner: usize) -> Vec<CourseSeed> {
    owners
        .par_iter()
        .flat_map(|&owner| {
            (0..per_owner)
                .map(|_| {
                    let title: String = Sentence(2..5).fake();
                    let hours: u32 = (1..40).fake();
                    let materials: Vec<String> = Words(2..6).fake();

                    CourseSeed {
                        title: title.trim_end_matches('.').to_string(),
                        description: Paragraph(2..5).fake(),
                        estimated_time: Some(format!("{} hours", hours)),
                        materials_needed: Some(
                            materials
                                .iter()
                                .map(|m| format!("* {}", m))
                                .collect::<Vec<_>>()
                                .join("\n"),
                        ),
                        owner,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub async fn seed_courses(
    db: &PgPool,
    owners: &[UserId],
    per_owner: usize,
) -> Result<Vec<CourseId>, sqlx::Error> {
    let start_time = Instant::now();
    println!(
        "📚 Seeding {} courses ({} per user)...",
        owners.len() * per_owner,
        per_owner
    );

    let courses = generate_courses(owners, per_owner);
    let ids = insert_courses_batch(db, &courses).await?;

    println!(
        "   ✓ Inserted {} courses in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

pub async fn insert_courses_batch(
    db: &PgPool,
    courses: &[CourseSeed],
) -> Result<Vec<CourseId>, sqlx::Error> {
    let mut tx = db.begin().await?;

    // 5 params per course
    const BATCH_SIZE: usize = 1000;

    let mut ids = Vec::with_capacity(courses.len());
    for chunk in courses.chunks(BATCH_SIZE) {
        ids.extend(insert_courses_chunk(&mut tx, chunk).await?);
    }

    tx.commit().await?;
    Ok(ids)
}

async fn insert_courses_chunk(
    tx: &mut Transaction<'_, Postgres>,
    courses: &[CourseSeed],
) -> Result<Vec<CourseId>, sqlx::Error> {
    if courses.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO courses (title, description, estimated_time, materials_needed, user_id) VALUES ",
    );

    for i in 0..courses.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 5;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${})",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5
        ));
    }

    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar(&query);
    for course in courses {
        q = q
            .bind(&course.title)
            .bind(&course.description)
            .bind(&course.estimated_time)
            .bind(&course.materials_needed)
            .bind(course.owner);
    }

    q.fetch_all(&mut **tx).await
}
