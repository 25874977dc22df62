use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// Customers shown in the social proof bar at the bottom of the page.
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Client {
    DeutscheTelekom,
    Hashicorp,
    Verizon,
    Nike,
    Linkedin,
}

impl Client {
    pub fn name(&self) -> &'static str {
        match self {
            Client::DeutscheTelekom => "Deutsche Telekom",
            Client::Hashicorp => "HashiCorp",
            Client::Verizon => "Verizon",
            Client::Nike => "Nike",
            Client::Linkedin => "LinkedIn",
        }
    }

    pub fn logo_path(&self) -> String {
        format!("/images/logos/{}.svg", self.as_ref())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClientLogo {
    pub name: &'static str,
    pub src: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogosBar {
    pub title: &'static str,
    pub clients: Vec<ClientLogo>,
}

impl Default for LogosBar {
    fn default() -> Self {
        Self {
            title: "We power experiences for over half a billion users",
            clients: Client::iter()
                .map(|c| ClientLogo {
                    name: c.name(),
                    src: c.logo_path(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, LogosBar};

    #[test]
    fn should_list_clients_in_order() {
        let names: Vec<&str> = LogosBar::default().clients.iter().map(|c| c.name).collect();
        assert_eq!(
            vec!["Deutsche Telekom", "HashiCorp", "Verizon", "Nike", "LinkedIn"],
            names
        );
    }

    #[test]
    fn should_build_logo_path() {
        assert_eq!(
            "/images/logos/deutsche-telekom.svg",
            Client::DeutscheTelekom.logo_path()
        );
    }
}
