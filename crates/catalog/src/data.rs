//! The static content catalog.
//!
//! Built once on first access and never mutated afterwards. Order matters:
//! the first entry is the landing page.

use once_cell::sync::Lazy;

use crate::nav::{NavigationEntry, PageContent, Section, SubTab};

static CATALOG: Lazy<Vec<NavigationEntry>> = Lazy::new(build_catalog);

/// The full navigation catalog, in sidebar order.
pub fn catalog() -> &'static [NavigationEntry] {
    &CATALOG
}

/// Look up an entry by id.
pub fn entry(id: &str) -> Option<&'static NavigationEntry> {
    CATALOG.iter().find(|item| item.id == id)
}

/// The entry shown on startup: the first one in the catalog.
pub fn default_entry() -> &'static NavigationEntry {
    &CATALOG[0]
}

fn build_catalog() -> Vec<NavigationEntry> {
    vec![
        NavigationEntry {
            id: "getting-started",
            title: "Getting Started",
            icon: "book-open",
            content: PageContent {
                title: "Getting Started With Jay's Learning",
                description: "A simple guide to learning things about all computer related things",
                sections: vec![],
            },
            sub_tabs: vec![],
        },
        NavigationEntry {
            id: "linux",
            title: "Linux",
            icon: "laptop",
            content: PageContent {
                title: "Linux Learning",
                description: "Explore the powerful features of Linux",
                sections: vec![],
            },
            sub_tabs: vec![
                SubTab {
                    id: "simple-commands",
                    title: "Simple Terminal Commands",
                    text: r#"# File and Directory Management
- ls # List directory contents
- cd <dir> # Change directory to <dir>
- rm <file> # Remove a file
- rmdir <dir> # Remove an empty directory
- cp <src> <dest> # Copy file or directory
- mv <src> <dest> # Move or rename file/directory
- touch <file> # Create a new empty file
- chmod 755 <file> # Change file permissions

# System Info and Monitoring
- uname -a # Display system information
- df -h # Show disk usage
- free -m # Show memory usage
- top # Display tasks and system load
- ps aux # List running processes

# Process Management
- kill <pid> # Kill process by PID
- killall <process> # Kill process by name
- htop # Interactive process viewer (if installed)

# Package Management
# Debian/Ubuntu
- apt install <package>, apt update
# Fedora/CentOS
- yum install <package>, dnf update
# Arch Linux
- pacman -S <package>, pacman -Syu"#,
                },
                SubTab {
                    id: "linux_directories",
                    title: "About Linux Directories",
                    text: r#"# Linux Directories Overview
- / # The top-level directory in Linux. All files and directories in the system are organized under the root directory
- ~ # The tilde (~) is a shortcut for the current user's home directory. Running cd ~ will take you to your personal home directory (e.g., /home/username). You can also use cd ~username to navigate to another user's home directory (provided you have the necessary permissions).
- /home # Contains home directories for users. Each user has their own sub-directory where they store personal files and settings
- /bin # Stores essential system binaries (executables) needed for the system to function
- /sbin # Stores essential system binaries (executables) needed for adminstrative tasks, usually requiring superuser (root) permissions
- /etc # Configuration files for system services and applications are stored here. For example, network configuration, user accounts and system services are managed through files in this directory
- /var # Stores variable data like system logs (/var/log), mail and other files that frequently change over time
- /usr # Holds user-installed software, libraries, documentation and other resources. It's one of the largest directories and contains sub-directories like /usr/bin, /usr/lib, and /usr/share
- /tmp # A temporary directory for storing files created by system processes and users. Files here are usually deleted on reboot
- /opt # Used for installing third-party software that isn't managed by the system's package manager. For example, manually installed applications can reside here
- /dev # Contains special files that represent system devices, such as hard drives, terminals and peripherals. These files allow software to intereact with hardware components
- /mnt and /media # Directories used for mounting external storage devices, such as USB drives, CDs or network shares

# Key Commands for Directory Management
- ls # List directory contents
- cd <dir> # Change directory to <dir>
- mkdir <dir> # Create a new directory
- rmdir <dir> # Remove an empty directory
- rm -r <dir> # Remove a directory and its contents
- pwd # Print current working directory"#,
                },
                SubTab {
                    id: "package-management",
                    title: "Package Management Commands",
                    text: r#"# Debian/Ubuntu
- apt install <package> # Install a package
- apt update # Update package lists
- apt upgrade # Upgrade installed packages
- apt update && apt upgrade # Commonly used as a combination

# Fedora/CentOS
- yum install <package> # Install a package
- yum update # Update all packages

# Arch Linux
- pacman -S <package> # Install a package
- pacman -Syu # Update the system"#,
                },
                SubTab {
                    id: "networking-commands",
                    title: "Networking Commands",
                    text: r#"- ifconfig # Display network configuration
- ping <host> # Test network connectivity
- iptables -h # List firewall rules
- netstat -tuln # List active network connections
- curl <url> # Make network requests"#,
                },
            ],
        },
        NavigationEntry {
            id: "windows",
            title: "Windows",
            icon: "laptop",
            content: PageContent {
                title: "Windows Learning",
                description: "Explore the powerful features of Windows",
                sections: vec![Section {
                    title: "Core Features",
                    text: "Discover the main features that make our platform unique.",
                }],
            },
            sub_tabs: vec![SubTab {
                id: "simple-commands",
                title: "Simple Command Prompt Commands",
                text: r#"# File and Directory Management
- dir # List directory contents
- cd <dir> # Change directory
- del <file> # Delete a file
- copy <src> <dest> # Copy file
- move <src> <dest> # Move file

# System Info and Monitoring
- systeminfo # Display system information
- tasklist # List running processes
- taskkill /F /PID <pid> # Kill process by PID

# Networking
- ipconfig # Display network configuration
- ping <host> # Check network connectivity
- netstat -an # List open network ports
- tracert <host> # Trace the route to a host"#,
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn entry_ids_are_unique() {
        let mut seen = HashSet::new();
        for item in catalog() {
            assert!(seen.insert(item.id), "duplicate entry id: {}", item.id);
        }
    }

    #[test]
    fn sub_tab_ids_are_unique_within_each_entry() {
        for item in catalog() {
            let mut seen = HashSet::new();
            for tab in &item.sub_tabs {
                assert!(
                    seen.insert(tab.id),
                    "duplicate sub-tab id {} under entry {}",
                    tab.id,
                    item.id
                );
            }
        }
    }

    #[test]
    fn default_entry_is_first() {
        assert_eq!(default_entry().id, catalog()[0].id);
        assert_eq!(default_entry().id, "getting-started");
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(entry("linux").map(|e| e.title), Some("Linux"));
        assert_eq!(entry("windows").map(|e| e.title), Some("Windows"));
        assert!(entry("macos").is_none());
    }

    #[test]
    fn getting_started_has_no_sections_or_sub_tabs() {
        let e = entry("getting-started").unwrap();
        assert_eq!(e.content.title, "Getting Started With Jay's Learning");
        assert!(e.content.sections.is_empty());
        assert!(!e.has_sub_tabs());
    }

    #[test]
    fn linux_sub_tabs_present_in_order() {
        let e = entry("linux").unwrap();
        let ids: Vec<&str> = e.sub_tabs.iter().map(|t| t.id).collect();
        assert_eq!(
            ids,
            [
                "simple-commands",
                "linux_directories",
                "package-management",
                "networking-commands"
            ]
        );
    }

    #[test]
    fn simple_commands_text_is_the_command_list() {
        let tab = entry("linux").unwrap().sub_tab("simple-commands").unwrap();
        assert_eq!(tab.title, "Simple Terminal Commands");
        assert!(tab.text.starts_with("# File and Directory Management"));
        assert!(tab.text.contains("- ls # List directory contents"));
        assert!(tab.text.contains("- pacman -S <package>, pacman -Syu"));
    }

    #[test]
    fn windows_core_features_section_is_plain_text() {
        let e = entry("windows").unwrap();
        assert_eq!(e.content.sections.len(), 1);
        let section = &e.content.sections[0];
        assert_eq!(section.title, "Core Features");
        assert!(!section.is_block());
    }
}
