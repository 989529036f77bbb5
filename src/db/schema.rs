//! Schema bootstrap.
//!
//! Idempotent DDL executed at startup so a fresh database (or the test
//! database) is usable without an external migration step.

use sqlx::PgPool;

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id              BIGSERIAL PRIMARY KEY,
    username        VARCHAR(50)  NOT NULL UNIQUE,
    email           VARCHAR(100) NOT NULL UNIQUE,
    password_hash   VARCHAR(255) NOT NULL,
    full_name       VARCHAR(100) NOT NULL,
    phone           VARCHAR(20),
    role            VARCHAR(10)  NOT NULL DEFAULT 'staff',
    is_active       BOOLEAN      NOT NULL DEFAULT TRUE,
    last_login      TIMESTAMPTZ,
    created_at      TIMESTAMPTZ  NOT NULL DEFAULT NOW(),
    updated_at      TIMESTAMPTZ  NOT NULL DEFAULT NOW()
)
"#;

const CREATE_SERVICE_TYPES: &str = r#"
CREATE TABLE IF NOT EXISTS service_types (
    id              BIGSERIAL PRIMARY KEY,
    name            VARCHAR(100) NOT NULL,
    description     TEXT,
    is_active       BOOLEAN      NOT NULL DEFAULT TRUE,
    created_at      TIMESTAMPTZ  NOT NULL DEFAULT NOW(),
    updated_at      TIMESTAMPTZ  NOT NULL DEFAULT NOW()
)
"#;

const CREATE_PRICING_RULES: &str = r#"
CREATE TABLE IF NOT EXISTS pricing_rules (
    id                  BIGSERIAL PRIMARY KEY,
    service_type_id     BIGINT        NOT NULL REFERENCES service_types(id),
    weight_from         NUMERIC(10,2) NOT NULL,
    weight_to           NUMERIC(10,2) NOT NULL,
    price               NUMERIC(10,2) NOT NULL,
    fragile_surcharge   NUMERIC(10,2),
    valuable_surcharge  NUMERIC(10,2),
    is_active           BOOLEAN       NOT NULL DEFAULT TRUE,
    created_at          TIMESTAMPTZ   NOT NULL DEFAULT NOW(),
    updated_at          TIMESTAMPTZ   NOT NULL DEFAULT NOW()
)
"#;

const CREATE_ORDERS: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id                  BIGSERIAL PRIMARY KEY,
    order_code          VARCHAR(20)   NOT NULL UNIQUE,
    sender_name         VARCHAR(100)  NOT NULL,
    sender_phone        VARCHAR(20)   NOT NULL,
    sender_address      TEXT          NOT NULL,
    receiver_name       VARCHAR(100)  NOT NULL,
    receiver_phone      VARCHAR(20)   NOT NULL,
    receiver_address    TEXT          NOT NULL,
    service_type_id     BIGINT        NOT NULL REFERENCES service_types(id),
    weight              NUMERIC(10,2) NOT NULL,
    is_fragile          BOOLEAN       NOT NULL DEFAULT FALSE,
    is_valuable         BOOLEAN       NOT NULL DEFAULT FALSE,
    total_amount        NUMERIC(12,2) NOT NULL,
    status              VARCHAR(12)   NOT NULL DEFAULT 'pending',
    notes               TEXT,
    created_by          BIGINT        REFERENCES users(id),
    created_at          TIMESTAMPTZ   NOT NULL DEFAULT NOW(),
    updated_at          TIMESTAMPTZ   NOT NULL DEFAULT NOW()
)
"#;

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_pricing_rules_service ON pricing_rules (service_type_id, is_active)",
    "CREATE INDEX IF NOT EXISTS idx_orders_created_by ON orders (created_by)",
    "CREATE INDEX IF NOT EXISTS idx_orders_status ON orders (status)",
    "CREATE INDEX IF NOT EXISTS idx_orders_created_at ON orders (created_at)",
];

/// Create all tables and indexes if they do not exist yet.
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in [
        CREATE_USERS,
        CREATE_SERVICE_TYPES,
        CREATE_PRICING_RULES,
        CREATE_ORDERS,
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }
    for ddl in CREATE_INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    tracing::info!("Database schema initialized");
    Ok(())
}
