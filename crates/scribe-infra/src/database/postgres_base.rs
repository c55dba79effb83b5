use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{DbBackend, DbConn, DbErr, EntityName, EntityTrait, PrimaryKeyTrait, Statement};

use scribe_core::error::RepoError;
use scribe_core::ports::BaseRepository;
use scribe_core::update::{Column, Mutation, Param, UPDATED_AT, UpdatePlan};

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Run a composed update as a single `UPDATE ... RETURNING *`.
    pub(crate) async fn apply_plan<C: Column>(
        &self,
        plan: &UpdatePlan<C>,
    ) -> Result<Option<E::Model>, RepoError> {
        let stmt = update_statement(E::default().table_name(), plan);

        E::find()
            .from_raw_sql(stmt)
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for PostgresBaseRepository<E>
where
    E: EntityTrait,
    E::Model: Sync + Send,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + 'static,
    T: From<E::Model> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn delete(&self, id: ID) -> Result<(), RepoError> {
        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

/// Render a plan with `$n` placeholders; the identifier binds last.
pub(crate) fn update_statement<C: Column>(table: &str, plan: &UpdatePlan<C>) -> Statement {
    let sets: Vec<String> = plan
        .mutations()
        .iter()
        .map(|m| match m {
            Mutation::Set {
                column, ordinal, ..
            } => format!("\"{}\" = ${}", column.name(), ordinal),
            Mutation::TouchUpdatedAt => format!("\"{UPDATED_AT}\" = NOW()"),
        })
        .collect();

    let sql = format!(
        "UPDATE \"{table}\" SET {} WHERE \"id\" = ${} RETURNING *",
        sets.join(", "),
        plan.id_ordinal()
    );

    let values = plan.params().into_iter().map(|p| match p {
        Param::Text(s) => sea_orm::Value::from(s),
        Param::Id(id) => sea_orm::Value::from(id),
    });

    Statement::from_sql_and_values(DbBackend::Postgres, sql, values)
}

const UNIQUE_COLUMNS: [&str; 3] = ["username", "email", "slug"];

/// Classify a database error; unique violations name the offending column.
pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    let msg = err.to_string();
    if msg.contains("duplicate") || msg.contains("unique") {
        let field = UNIQUE_COLUMNS
            .into_iter()
            .find(|col| msg.contains(&format!("_{col}_key")))
            .unwrap_or("record");
        return RepoError::Constraint(field.to_string());
    }

    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(msg),
        _ => RepoError::Query(msg),
    }
}
