use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510010007_create_max_marks"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("max_marks"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("course_id")).integer().not_null().primary_key())
                    .col(ColumnDef::new(Alias::new("total_class_score")).integer().not_null().default(100))
                    .col(ColumnDef::new(Alias::new("max_attendance_marks")).integer().not_null().default(10))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_max_marks_course")
                            .from(Alias::new("max_marks"), Alias::new("course_id"))
                            .to(Alias::new("courses"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("max_marks")).to_owned())
            .await
    }
}
