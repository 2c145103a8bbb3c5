use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510010006_create_attendance_records"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("attendance_records"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("course_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("student_index")).string_len(15).not_null())
                    .col(ColumnDef::new(Alias::new("session_key")).string_len(100).not_null())
                    .col(ColumnDef::new(Alias::new("timestamp")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("student_latitude")).double().null())
                    .col(ColumnDef::new(Alias::new("student_longitude")).double().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_att_rec_course")
                            .from(Alias::new("attendance_records"), Alias::new("course_id"))
                            .to(Alias::new("courses"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_att_rec_student")
                            .from(Alias::new("attendance_records"), Alias::new("student_index"))
                            .to(Alias::new("students"), Alias::new("index_number"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One row per student per (course, session). Inserts that would duplicate fail atomically.
        manager
            .create_index(
                Index::create()
                    .name("ux_att_rec_course_session_student")
                    .if_not_exists()
                    .table(Alias::new("attendance_records"))
                    .col(Alias::new("course_id"))
                    .col(Alias::new("session_key"))
                    .col(Alias::new("student_index"))
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("attendance_records")).to_owned())
            .await
    }
}
