use serde::Deserialize;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct LoginForm {
    pub phone: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
    pub error: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub phone: String,
    pub father_name: Option<String>,
    pub village: Option<String>,
    pub district: Option<String>,
}

#[derive(Deserialize)]
pub struct CheckoutForm {
    pub plan_id: Uuid,
}

#[derive(Deserialize)]
pub struct ErrorQuery {
    pub error: Option<String>,
}
