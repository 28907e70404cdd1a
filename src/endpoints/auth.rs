use super::EndpointCatalog;

impl EndpointCatalog {
    pub fn password_login(&self) -> String {
        format!("{}/user/login/password", self.prefix)
    }

    pub fn logout(&self) -> String {
        format!("{}/user/logout", self.prefix)
    }

    pub fn register(&self) -> String {
        format!("{}/user/register", self.prefix)
    }
}
