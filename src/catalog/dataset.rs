//! The embedded reference dataset backing both catalogs.
//!
//! Data only; every behavior lives in the lookup engine and the catalog
//! specializations. Entries are listed in catalog order: countries by
//! short code, regions grouped by country and then by subdivision code.
//! Each region's composite code carries its owning country as the prefix
//! before the underscore, and every prefix names a country in the table
//! above it.

use super::country::Country;
use super::region::Region;

pub(crate) static COUNTRIES: &[Country] = &[
    Country { code: "AD", label: "Andorra", demonym: "Andorran", long_code: "andorra" },
    Country { code: "AE", label: "United Arab Emirates", demonym: "Emirati", long_code: "united_arab_emirates" },
    Country { code: "AM", label: "Armenia", demonym: "Armenian", long_code: "armenia" },
    Country { code: "AR", label: "Argentina", demonym: "Argentine", long_code: "argentina" },
    Country { code: "AT", label: "Austria", demonym: "Austrian", long_code: "austria" },
    Country { code: "AU", label: "Australia", demonym: "Australian", long_code: "australia" },
    Country { code: "BE", label: "Belgium", demonym: "Belgian", long_code: "belgium" },
    Country { code: "BR", label: "Brazil", demonym: "Brazilian", long_code: "brazil" },
    Country { code: "CA", label: "Canada", demonym: "Canadian", long_code: "canada" },
    Country { code: "CH", label: "Switzerland", demonym: "Swiss", long_code: "switzerland" },
    Country { code: "CL", label: "Chile", demonym: "Chilean", long_code: "chile" },
    Country { code: "CN", label: "China", demonym: "Chinese", long_code: "china" },
    Country { code: "CO", label: "Colombia", demonym: "Colombian", long_code: "colombia" },
    Country { code: "CZ", label: "Czechia", demonym: "Czech", long_code: "czechia" },
    Country { code: "DE", label: "Germany", demonym: "German", long_code: "germany" },
    Country { code: "DK", label: "Denmark", demonym: "Danish", long_code: "denmark" },
    Country { code: "EG", label: "Egypt", demonym: "Egyptian", long_code: "egypt" },
    Country { code: "ES", label: "Spain", demonym: "Spanish", long_code: "spain" },
    Country { code: "FI", label: "Finland", demonym: "Finnish", long_code: "finland" },
    Country { code: "FR", label: "France", demonym: "French", long_code: "france" },
    Country { code: "GB", label: "United Kingdom", demonym: "British", long_code: "united_kingdom" },
    Country { code: "GR", label: "Greece", demonym: "Greek", long_code: "greece" },
    Country { code: "IE", label: "Ireland", demonym: "Irish", long_code: "ireland" },
    Country { code: "IL", label: "Israel", demonym: "Israeli", long_code: "israel" },
    Country { code: "IN", label: "India", demonym: "Indian", long_code: "india" },
    Country { code: "IT", label: "Italy", demonym: "Italian", long_code: "italy" },
    Country { code: "JP", label: "Japan", demonym: "Japanese", long_code: "japan" },
    Country { code: "KE", label: "Kenya", demonym: "Kenyan", long_code: "kenya" },
    Country { code: "KR", label: "South Korea", demonym: "South Korean", long_code: "south_korea" },
    Country { code: "MX", label: "Mexico", demonym: "Mexican", long_code: "mexico" },
    Country { code: "NL", label: "Netherlands", demonym: "Dutch", long_code: "netherlands" },
    Country { code: "NO", label: "Norway", demonym: "Norwegian", long_code: "norway" },
    Country { code: "NZ", label: "New Zealand", demonym: "New Zealander", long_code: "new_zealand" },
    Country { code: "PL", label: "Poland", demonym: "Polish", long_code: "poland" },
    Country { code: "PT", label: "Portugal", demonym: "Portuguese", long_code: "portugal" },
    Country { code: "SE", label: "Sweden", demonym: "Swedish", long_code: "sweden" },
    Country { code: "SG", label: "Singapore", demonym: "Singaporean", long_code: "singapore" },
    Country { code: "TR", label: "Turkey", demonym: "Turkish", long_code: "turkey" },
    Country { code: "US", label: "United States", demonym: "American", long_code: "united_states" },
    Country { code: "ZA", label: "South Africa", demonym: "South African", long_code: "south_africa" },
];

pub(crate) static REGIONS: &[Region] = &[
    // Armenia
    Region { code: "AM_AG", label: "Aragatsotn", long_code: "armenia_aragatsotn" },
    Region { code: "AM_AR", label: "Ararat", long_code: "armenia_ararat" },
    Region { code: "AM_AV", label: "Armavir", long_code: "armenia_armavir" },
    Region { code: "AM_ER", label: "Yerevan", long_code: "armenia_yerevan" },
    Region { code: "AM_GR", label: "Gegharkunik", long_code: "armenia_gegharkunik" },
    Region { code: "AM_KT", label: "Kotayk", long_code: "armenia_kotayk" },
    Region { code: "AM_LO", label: "Lori", long_code: "armenia_lori" },
    Region { code: "AM_SH", label: "Shirak", long_code: "armenia_shirak" },
    Region { code: "AM_SU", label: "Syunik", long_code: "armenia_syunik" },
    Region { code: "AM_TV", label: "Tavush", long_code: "armenia_tavush" },
    Region { code: "AM_VD", label: "Vayots Dzor", long_code: "armenia_vayots_dzor" },
    // Australia
    Region { code: "AU_ACT", label: "Australian Capital Territory", long_code: "australia_australian_capital_territory" },
    Region { code: "AU_NSW", label: "New South Wales", long_code: "australia_new_south_wales" },
    Region { code: "AU_NT", label: "Northern Territory", long_code: "australia_northern_territory" },
    Region { code: "AU_QLD", label: "Queensland", long_code: "australia_queensland" },
    Region { code: "AU_SA", label: "South Australia", long_code: "australia_south_australia" },
    Region { code: "AU_TAS", label: "Tasmania", long_code: "australia_tasmania" },
    Region { code: "AU_VIC", label: "Victoria", long_code: "australia_victoria" },
    Region { code: "AU_WA", label: "Western Australia", long_code: "australia_western_australia" },
    // Canada
    Region { code: "CA_AB", label: "Alberta", long_code: "canada_alberta" },
    Region { code: "CA_BC", label: "British Columbia", long_code: "canada_british_columbia" },
    Region { code: "CA_MB", label: "Manitoba", long_code: "canada_manitoba" },
    Region { code: "CA_NB", label: "New Brunswick", long_code: "canada_new_brunswick" },
    Region { code: "CA_NL", label: "Newfoundland and Labrador", long_code: "canada_newfoundland_and_labrador" },
    Region { code: "CA_NS", label: "Nova Scotia", long_code: "canada_nova_scotia" },
    Region { code: "CA_NT", label: "Northwest Territories", long_code: "canada_northwest_territories" },
    Region { code: "CA_NU", label: "Nunavut", long_code: "canada_nunavut" },
    Region { code: "CA_ON", label: "Ontario", long_code: "canada_ontario" },
    Region { code: "CA_PE", label: "Prince Edward Island", long_code: "canada_prince_edward_island" },
    Region { code: "CA_QC", label: "Quebec", long_code: "canada_quebec" },
    Region { code: "CA_SK", label: "Saskatchewan", long_code: "canada_saskatchewan" },
    Region { code: "CA_YT", label: "Yukon", long_code: "canada_yukon" },
    // United Kingdom
    Region { code: "GB_ENG", label: "England", long_code: "united_kingdom_england" },
    Region { code: "GB_NIR", label: "Northern Ireland", long_code: "united_kingdom_northern_ireland" },
    Region { code: "GB_SCT", label: "Scotland", long_code: "united_kingdom_scotland" },
    Region { code: "GB_WLS", label: "Wales", long_code: "united_kingdom_wales" },
    // United States
    Region { code: "US_AK", label: "Alaska", long_code: "united_states_alaska" },
    Region { code: "US_AL", label: "Alabama", long_code: "united_states_alabama" },
    Region { code: "US_AR", label: "Arkansas", long_code: "united_states_arkansas" },
    Region { code: "US_AZ", label: "Arizona", long_code: "united_states_arizona" },
    Region { code: "US_CA", label: "California", long_code: "united_states_california" },
    Region { code: "US_CO", label: "Colorado", long_code: "united_states_colorado" },
    Region { code: "US_CT", label: "Connecticut", long_code: "united_states_connecticut" },
    Region { code: "US_DE", label: "Delaware", long_code: "united_states_delaware" },
    Region { code: "US_FL", label: "Florida", long_code: "united_states_florida" },
    Region { code: "US_GA", label: "Georgia", long_code: "united_states_georgia" },
    Region { code: "US_HI", label: "Hawaii", long_code: "united_states_hawaii" },
    Region { code: "US_IA", label: "Iowa", long_code: "united_states_iowa" },
    Region { code: "US_ID", label: "Idaho", long_code: "united_states_idaho" },
    Region { code: "US_IL", label: "Illinois", long_code: "united_states_illinois" },
    Region { code: "US_IN", label: "Indiana", long_code: "united_states_indiana" },
    Region { code: "US_KS", label: "Kansas", long_code: "united_states_kansas" },
    Region { code: "US_KY", label: "Kentucky", long_code: "united_states_kentucky" },
    Region { code: "US_LA", label: "Louisiana", long_code: "united_states_louisiana" },
    Region { code: "US_MA", label: "Massachusetts", long_code: "united_states_massachusetts" },
    Region { code: "US_MD", label: "Maryland", long_code: "united_states_maryland" },
    Region { code: "US_ME", label: "Maine", long_code: "united_states_maine" },
    Region { code: "US_MI", label: "Michigan", long_code: "united_states_michigan" },
    Region { code: "US_MN", label: "Minnesota", long_code: "united_states_minnesota" },
    Region { code: "US_MO", label: "Missouri", long_code: "united_states_missouri" },
    Region { code: "US_MS", label: "Mississippi", long_code: "united_states_mississippi" },
    Region { code: "US_MT", label: "Montana", long_code: "united_states_montana" },
    Region { code: "US_NC", label: "North Carolina", long_code: "united_states_north_carolina" },
    Region { code: "US_ND", label: "North Dakota", long_code: "united_states_north_dakota" },
    Region { code: "US_NE", label: "Nebraska", long_code: "united_states_nebraska" },
    Region { code: "US_NH", label: "New Hampshire", long_code: "united_states_new_hampshire" },
    Region { code: "US_NJ", label: "New Jersey", long_code: "united_states_new_jersey" },
    Region { code: "US_NM", label: "New Mexico", long_code: "united_states_new_mexico" },
    Region { code: "US_NV", label: "Nevada", long_code: "united_states_nevada" },
    Region { code: "US_NY", label: "New York", long_code: "united_states_new_york" },
    Region { code: "US_OH", label: "Ohio", long_code: "united_states_ohio" },
    Region { code: "US_OK", label: "Oklahoma", long_code: "united_states_oklahoma" },
    Region { code: "US_OR", label: "Oregon", long_code: "united_states_oregon" },
    Region { code: "US_PA", label: "Pennsylvania", long_code: "united_states_pennsylvania" },
    Region { code: "US_RI", label: "Rhode Island", long_code: "united_states_rhode_island" },
    Region { code: "US_SC", label: "South Carolina", long_code: "united_states_south_carolina" },
    Region { code: "US_SD", label: "South Dakota", long_code: "united_states_south_dakota" },
    Region { code: "US_TN", label: "Tennessee", long_code: "united_states_tennessee" },
    Region { code: "US_TX", label: "Texas", long_code: "united_states_texas" },
    Region { code: "US_UT", label: "Utah", long_code: "united_states_utah" },
    Region { code: "US_VA", label: "Virginia", long_code: "united_states_virginia" },
    Region { code: "US_VT", label: "Vermont", long_code: "united_states_vermont" },
    Region { code: "US_WA", label: "Washington", long_code: "united_states_washington" },
    Region { code: "US_WI", label: "Wisconsin", long_code: "united_states_wisconsin" },
    Region { code: "US_WV", label: "West Virginia", long_code: "united_states_west_virginia" },
    Region { code: "US_WY", label: "Wyoming", long_code: "united_states_wyoming" },
];
