use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Authors::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Authors::Username).string_len(50).not_null().unique_key())
                    .col(ColumnDef::new(Authors::Email).string_len(100).not_null().unique_key())
                    .col(ColumnDef::new(Authors::PasswordHash).string_len(255).not_null())
                    .col(ColumnDef::new(Authors::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Authors::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Authors::Bio).text().not_null().default(""))
                    .col(ColumnDef::new(Authors::AvatarUrl).string_len(255).not_null().default(""))
                    .col(ColumnDef::new(Authors::IsActive).boolean().not_null().default(true))
                    .col(ColumnDef::new(Authors::IsVerified).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Authors::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Authors::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_authors_is_active")
                    .table(Authors::Table)
                    .col(Authors::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authors::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Authors {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    Bio,
    AvatarUrl,
    IsActive,
    IsVerified,
    CreatedAt,
    UpdatedAt,
}
