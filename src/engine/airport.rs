const AIRPORT_KEYWORDS: [&str; 6] = [
    "airport",
    "terminal",
    "departure",
    "arrival",
    "international",
    "domestic",
];

pub fn is_airport_trip(pickup_address: &str, dropoff_address: &str) -> bool {
    contains_keyword(pickup_address) || contains_keyword(dropoff_address)
}

fn contains_keyword(address: &str) -> bool {
    let address = address.to_lowercase();

    AIRPORT_KEYWORDS
        .iter()
        .any(|keyword| address.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_keywords_in_either_endpoint() {
        assert!(is_airport_trip(
            "Melbourne International Airport",
            "123 Collins St"
        ));
        assert!(is_airport_trip("123 Collins St", "Terminal 4, Tullamarine"));
        assert!(is_airport_trip("Domestic departures", "Southbank"));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(is_airport_trip("MELBOURNE AIRPORT T2", "Fitzroy"));
        assert!(is_airport_trip("Carlton", "arrivals pickup zone"));
    }

    #[test]
    fn plain_addresses_do_not_match() {
        assert!(!is_airport_trip("55 Swanston St, Melbourne", "Docklands"));
        assert!(!is_airport_trip("Port Melbourne", "St Kilda"));
    }
}
