use contracts::domain::a001_package::aggregate::Package;

/// Demo catalog shown by the package list
const CATALOG_JSON: &str = r#"
[
    {
        "namespace": "geerlingguy",
        "name": "nginx",
        "description": "Nginx installation for Linux, FreeBSD and OpenBSD.",
        "download_count": 1843200,
        "platforms": ["EL", "Debian", "Ubuntu"],
        "modified": "2018-04-02T10:11:00Z"
    },
    {
        "namespace": "geerlingguy",
        "name": "mysql",
        "description": "MySQL server for RHEL/CentOS and Debian/Ubuntu.",
        "download_count": 1502311,
        "platforms": ["EL", "Debian", "Ubuntu"],
        "modified": "2018-03-21T08:45:10Z"
    },
    {
        "namespace": "jdauphant",
        "name": "nginx",
        "description": "Ansible role to install and manage nginx configuration.",
        "download_count": 650127,
        "platforms": ["Debian", "Ubuntu", "EL", "Fedora"],
        "modified": "2017-11-30T17:02:44Z"
    },
    {
        "namespace": "bennojoy",
        "name": "ntp",
        "description": "Configures the NTP daemon.",
        "download_count": 98004,
        "platforms": ["EL", "Fedora"],
        "modified": "2016-06-12T12:00:00Z"
    },
    {
        "namespace": "elastic",
        "name": "elasticsearch",
        "description": "Elasticsearch for Linux.",
        "download_count": 402210,
        "platforms": ["Debian", "Ubuntu", "EL"],
        "modified": "2018-04-10T09:30:00Z"
    },
    {
        "namespace": "ANXS",
        "name": "postgresql",
        "description": "Install and configure PostgreSQL, dependencies, extensions, databases and users.",
        "download_count": 720981,
        "platforms": ["Debian", "Ubuntu"],
        "modified": "2018-01-15T14:20:00Z"
    }
]
"#;

pub fn load_catalog() -> Vec<Package> {
    match serde_json::from_str(CATALOG_JSON) {
        Ok(packages) => packages,
        Err(err) => {
            log::error!("Failed to parse package catalog: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses() {
        let packages = load_catalog();
        assert_eq!(packages.len(), 6);
        assert_eq!(packages[0].full_name(), "geerlingguy.nginx");
    }
}
