use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxUserRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxAboutRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxResumeRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxMessageRepo {
    pub pool: PgPool,
}
