use crate::params::ParamList;

/// Gateway credentials sent with every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub user: String,
    pub vendor: String,
    pub partner: String,
    pub password: String,
}

impl UserInfo {
    pub fn new(user: String, vendor: String, partner: String, password: String) -> Self {
        Self {
            user,
            vendor,
            partner,
            password,
        }
    }

    pub fn append_params(&self, params: &mut ParamList) {
        params.push("USER", &self.user);
        params.push("VENDOR", &self.vendor);
        params.push("PARTNER", &self.partner);
        params.push("PWD", &self.password);
    }
}
