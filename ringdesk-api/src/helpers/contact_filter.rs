use shared_types::{
    CarrierCounts, CarrierGroup, Contact, ContactFilter, ContactStats, ContactStatus, SortOrder,
    StatusCounts,
};

/// Applies `filter` to contacts already in storage order (newest first).
///
/// Filtering keeps the relative order; sorting is stable, so contacts that
/// compare equal stay in storage order.
pub fn apply_filter(contacts: Vec<Contact>, filter: &ContactFilter) -> Vec<Contact> {
    let search = filter.search.as_deref().filter(|term| !term.is_empty());

    let mut matching: Vec<Contact> = contacts
        .into_iter()
        .filter(|contact| search.map_or(true, |term| matches_search(contact, term)))
        .filter(|contact| {
            filter
                .operator
                .map_or(true, |group| matches_operator(&contact.operators, group))
        })
        .filter(|contact| filter.status.map_or(true, |status| contact.status == status))
        .filter(|contact| {
            filter
                .priority
                .map_or(true, |priority| contact.priority == priority)
        })
        .collect();

    if let Some(order) = filter.sort {
        sort_contacts(&mut matching, order);
    }

    matching
}

/// Case-insensitive match on name and organization; phones match verbatim.
/// The term is used as given, surrounding whitespace included.
pub fn matches_search(contact: &Contact, term: &str) -> bool {
    let needle = term.to_lowercase();

    contact.name.to_lowercase().contains(&needle)
        || contact.org.to_lowercase().contains(&needle)
        || contact.phones.contains(term)
}

/// Whether any carrier in the operators listing belongs to `group`
pub fn matches_operator(operators: &str, group: CarrierGroup) -> bool {
    let ops = operators.to_lowercase();

    match group {
        CarrierGroup::Telia => {
            ops.contains("telia sverige ab") || ops.contains("teliasonera ab")
        }
        CarrierGroup::Tele2 => ops.contains("tele2 sverige ab"),
        CarrierGroup::Tre => ops.contains("hi3g access ab"),
        CarrierGroup::Telenor => ops.contains("telenor"),
        CarrierGroup::Other => {
            !(ops.contains("telia")
                || ops.contains("tele2")
                || ops.contains("hi3g")
                || ops.contains("telenor"))
        }
    }
}

/// Single group per contact for statistics, checked in the order telia,
/// tele2, tre, telenor. A blank listing has no group.
pub fn carrier_group(operators: &str) -> Option<CarrierGroup> {
    let ops = operators.to_lowercase();

    if ops.contains("telia") {
        Some(CarrierGroup::Telia)
    } else if ops.contains("tele2") {
        Some(CarrierGroup::Tele2)
    } else if ops.contains("hi3g") || ops.contains("tre") {
        Some(CarrierGroup::Tre)
    } else if ops.contains("telenor") {
        Some(CarrierGroup::Telenor)
    } else if !ops.trim().is_empty() {
        Some(CarrierGroup::Other)
    } else {
        None
    }
}

pub fn sort_contacts(contacts: &mut [Contact], order: SortOrder) {
    match order {
        SortOrder::NameAsc => contacts.sort_by_key(|c| c.name.to_lowercase()),
        SortOrder::NameDesc => {
            contacts.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
        }
        SortOrder::PhonesDesc => contacts.sort_by(|a, b| b.phone_count().cmp(&a.phone_count())),
        SortOrder::PhonesAsc => contacts.sort_by_key(|c| c.phone_count()),
        SortOrder::Recent => contacts.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
    }
}

pub fn compute_stats(contacts: &[Contact]) -> ContactStats {
    let mut by_status = StatusCounts::default();
    let mut by_carrier = CarrierCounts::default();
    let mut with_notes = 0;

    for contact in contacts {
        let status_count = match contact.status {
            ContactStatus::New => &mut by_status.new,
            ContactStatus::Contacted => &mut by_status.contacted,
            ContactStatus::Interested => &mut by_status.interested,
            ContactStatus::NotInterested => &mut by_status.not_interested,
            ContactStatus::Converted => &mut by_status.converted,
        };
        *status_count += 1;

        if let Some(group) = carrier_group(&contact.operators) {
            let carrier_count = match group {
                CarrierGroup::Telenor => &mut by_carrier.telenor,
                CarrierGroup::Tele2 => &mut by_carrier.tele2,
                CarrierGroup::Tre => &mut by_carrier.tre,
                CarrierGroup::Telia => &mut by_carrier.telia,
                CarrierGroup::Other => &mut by_carrier.other,
            };
            *carrier_count += 1;
        }

        if !contact.notes.trim().is_empty() {
            with_notes += 1;
        }
    }

    ContactStats {
        total: contacts.len(),
        by_status,
        by_carrier,
        with_notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ContactPriority;

    fn contact(id: i64, name: &str, phones: &str, operators: &str) -> Contact {
        Contact {
            id,
            batch_id: 1,
            name: name.to_string(),
            org: format!("55{}", id),
            address: String::new(),
            city: String::new(),
            phones: phones.to_string(),
            users: String::new(),
            operators: operators.to_string(),
            contact: String::new(),
            role: String::new(),
            notes: String::new(),
            priority: ContactPriority::Medium,
            status: ContactStatus::New,
            last_called_at: None,
            created_at: 1000 - id,
            updated_at: 1000 - id,
        }
    }

    fn sample() -> Vec<Contact> {
        vec![
            contact(1, "Bygg AB", "08-123 456", "Telia Sverige AB"),
            contact(2, "anna café", "070-111 22 33\n070-222 33 44", "Tele2 Sverige AB\nTelenor"),
            contact(3, "Cykel & Co", "031-44 55 66", "HI3G Access AB"),
            contact(
                4,
                "Däck Nord",
                "090-12 34 56\n070-1\n073-2",
                "Lycamobile Sweden Limited",
            ),
        ]
    }

    fn ids(contacts: &[Contact]) -> Vec<i64> {
        contacts.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_empty_filter_keeps_storage_order() {
        let filtered = apply_filter(sample(), &ContactFilter::default());
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_names_and_raw_on_phones() {
        let by_name = ContactFilter {
            search: Some("ANNA".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(sample(), &by_name)), vec![2]);

        let by_phone = ContactFilter {
            search: Some("44 55".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(sample(), &by_phone)), vec![3]);
    }

    #[test]
    fn test_search_ignores_officer_and_keeps_spaces() {
        let mut contacts = sample();
        contacts[0].contact = "Per Olsson".to_string();

        let by_officer = ContactFilter {
            search: Some("olsson".to_string()),
            ..Default::default()
        };
        assert!(apply_filter(contacts.clone(), &by_officer).is_empty());

        let padded = ContactFilter {
            search: Some(" bygg".to_string()),
            ..Default::default()
        };
        assert!(apply_filter(contacts, &padded).is_empty());
    }

    #[test]
    fn test_operator_groups() {
        let ops = |group| {
            let filter = ContactFilter {
                operator: Some(group),
                ..Default::default()
            };
            ids(&apply_filter(sample(), &filter))
        };

        assert_eq!(ops(CarrierGroup::Telia), vec![1]);
        assert_eq!(ops(CarrierGroup::Tele2), vec![2]);
        assert_eq!(ops(CarrierGroup::Telenor), vec![2]);
        assert_eq!(ops(CarrierGroup::Tre), vec![3]);
        assert_eq!(ops(CarrierGroup::Other), vec![4]);
    }

    #[test]
    fn test_status_and_priority_must_both_match() {
        let mut contacts = sample();
        contacts[0].status = ContactStatus::Interested;
        contacts[0].priority = ContactPriority::High;
        contacts[1].status = ContactStatus::Interested;

        let filter = ContactFilter {
            status: Some(ContactStatus::Interested),
            priority: Some(ContactPriority::High),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(contacts, &filter)), vec![1]);
    }

    #[test]
    fn test_sort_by_phone_count_is_stable() {
        let desc = ContactFilter {
            sort: Some(SortOrder::PhonesDesc),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(sample(), &desc)), vec![4, 2, 1, 3]);

        let asc = ContactFilter {
            sort: Some(SortOrder::PhonesAsc),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(sample(), &asc)), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_by_name_ignores_case() {
        let filter = ContactFilter {
            sort: Some(SortOrder::NameAsc),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filter(sample(), &filter)), vec![2, 1, 3, 4]);
    }

    #[test]
    fn test_carrier_group_first_family_wins() {
        assert_eq!(
            carrier_group("Tele2 Sverige AB\nTelenor"),
            Some(CarrierGroup::Tele2)
        );
        assert_eq!(
            carrier_group("Telenor Sverige AB\nTelia Sverige AB"),
            Some(CarrierGroup::Telia)
        );
        assert_eq!(carrier_group("Hi3G Access AB"), Some(CarrierGroup::Tre));
        assert_eq!(carrier_group("TeliaSonera AB"), Some(CarrierGroup::Telia));
        assert_eq!(
            carrier_group("Lycamobile Sweden Limited"),
            Some(CarrierGroup::Other)
        );
        assert_eq!(carrier_group(""), None);
        assert_eq!(carrier_group(" \n "), None);
    }

    #[test]
    fn test_stats_grouping() {
        let mut contacts = sample();
        contacts[0].status = ContactStatus::Converted;
        contacts[2].notes = "[2025-03-14 09:05:59]\nInget svar".to_string();
        contacts[3].notes = "  ".to_string();
        contacts.push(contact(5, "Utan Operatör", "0920-123 45", ""));

        let stats = compute_stats(&contacts);

        assert_eq!(stats.total, 5);
        assert_eq!(stats.by_status.new, 4);
        assert_eq!(stats.by_status.converted, 1);
        assert_eq!(stats.by_carrier.telia, 1);
        assert_eq!(stats.by_carrier.tele2, 1);
        assert_eq!(stats.by_carrier.tre, 1);
        assert_eq!(stats.by_carrier.other, 1);
        assert_eq!(stats.by_carrier.telenor, 0);
        assert_eq!(stats.with_notes, 1);
    }
}
