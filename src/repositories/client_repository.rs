//! Repositorio de empresas cliente

use sqlx::PgPool;

use crate::models::client::{ClientCompany, CreateClientRequest};
use crate::utils::errors::AppError;

const CLIENT_COLUMNS: &str =
    "id, company_name, contact_person, email, phone, address, client_type_id, created_at";

pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<ClientCompany>, AppError> {
        let query = format!("SELECT {} FROM client_companies ORDER BY id", CLIENT_COLUMNS);

        let clients = sqlx::query_as::<_, ClientCompany>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(clients)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<ClientCompany>, AppError> {
        let query = format!(
            "SELECT {} FROM client_companies WHERE id = $1",
            CLIENT_COLUMNS
        );

        let client = sqlx::query_as::<_, ClientCompany>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn create(&self, request: &CreateClientRequest) -> Result<ClientCompany, AppError> {
        let query = format!(
            "INSERT INTO client_companies (company_name, contact_person, email, phone, address, client_type_id) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            CLIENT_COLUMNS
        );

        let client = sqlx::query_as::<_, ClientCompany>(&query)
            .bind(&request.company_name)
            .bind(&request.contact_person)
            .bind(&request.email)
            .bind(&request.phone)
            .bind(&request.address)
            .bind(request.client_type_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn update(
        &self,
        id: i32,
        request: &CreateClientRequest,
    ) -> Result<Option<ClientCompany>, AppError> {
        let query = format!(
            "UPDATE client_companies SET company_name = $2, contact_person = $3, email = $4, \
             phone = $5, address = $6, client_type_id = $7 WHERE id = $1 RETURNING {}",
            CLIENT_COLUMNS
        );

        let client = sqlx::query_as::<_, ClientCompany>(&query)
            .bind(id)
            .bind(&request.company_name)
            .bind(&request.contact_person)
            .bind(&request.email)
            .bind(&request.phone)
            .bind(&request.address)
            .bind(request.client_type_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }

    pub async fn delete(&self, id: i32) -> Result<Option<ClientCompany>, AppError> {
        let query = format!(
            "DELETE FROM client_companies WHERE id = $1 RETURNING {}",
            CLIENT_COLUMNS
        );

        let client = sqlx::query_as::<_, ClientCompany>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(client)
    }
}
