// scf-core/src/domain/catalog/categories.rs
//
// Hand-maintained discoverability groups. Membership is non-exclusive and is
// kept independent from the framework registry: a member key that has no mapped
// controls is simply not listed.

/// `(category name, member framework keys)` in display order.
pub static FRAMEWORK_CATEGORIES: &[(&str, &[&str])] = &[
    // --- AI & Emerging Technology ---
    (
        "ai_governance",
        &[
            "iso_42001_2023",
            "nist_ai_rmf_1.0",
            "nist_ai_600_1",
            "eu_ai_act",
            "eu_cyber_resilience_act",
            "eu_cra_annexes",
        ],
    ),
    // --- Core Security Frameworks ---
    (
        "iso_standards",
        &[
            "iso_27001_2022",
            "iso_27002_2022",
            "iso_27017_2015",
            "iso_27018_2014",
            "iso_27701_2025",
            "iso_22301_2019",
            "iso_29100_2024",
            "iso_31000_2009",
            "iso_31010_2009",
            "iso_sae_21434_2021",
            "iso_42001_2023",
        ],
    ),
    (
        "nist_frameworks",
        &[
            "nist_csf_2.0",
            "nist_800_37_r2",
            "nist_800_39",
            "nist_800_53_r4",
            "nist_800_53_r4_low",
            "nist_800_53_r4_moderate",
            "nist_800_53_r4_high",
            "nist_800_53_r5",
            "nist_800_53b_r5_privacy",
            "nist_800_53b_r5_low",
            "nist_800_53b_r5_moderate",
            "nist_800_53b_r5_high",
            "nist_800_53_r5_noc",
            "nist_800_63b",
            "nist_800_160",
            "nist_800_171_r2",
            "nist_800_171a",
            "nist_800_171_r3",
            "nist_800_171a_r3",
            "nist_800_172",
            "nist_800_207",
            "nist_800_218",
            "nist_privacy_framework_1.0",
            "nist_ai_rmf_1.0",
            "nist_ai_600_1",
        ],
    ),
    (
        "cis_controls",
        &[
            "cis_csc_8.1",
            "cis_csc_8.1_ig1",
            "cis_csc_8.1_ig2",
            "cis_csc_8.1_ig3",
        ],
    ),
    (
        "cloud_security",
        &[
            "iso_27017_2015",
            "iso_27018_2014",
            "csa_ccm_4",
            "csa_iot_scf_2",
            "germany_c5_2020",
        ],
    ),
    (
        "governance",
        &[
            "cobit_2019",
            "coso_2017",
            "enisa_2.0",
        ],
    ),
    // --- Privacy ---
    (
        "privacy",
        &[
            "gdpr",
            "iso_27701_2025",
            "iso_29100_2024",
            "nist_privacy_framework_1.0",
            "nist_800_53b_r5_privacy",
            "apec_privacy_2015",
            "gapp",
            "oecd_privacy",
            "us_dpf",
            "us_ca_ccpa_2025",
            "us_co_cpa",
            "us_va_cdpa_2025",
            "us_or_cpa",
            "us_tn_tipa",
            "us_tx_cdpa",
            "us_coppa",
            "us_ferpa",
            "us_fipps",
            "us_il_bipa",
            "us_il_ipa",
            "us_il_pipa",
            "brazil_lgpd",
            "india_dpdpa_2023",
            "china_privacy_law",
            "china_data_security_law",
            "japan_appi",
            "canada_pipeda",
            "south_africa",
            "saudi_pdpl",
            "qatar_pdppl",
            "kenya_dpa_2019",
            "nigeria_dpr_2019",
            "nz_privacy_act_2020",
            "australia_privacy_act",
            "australia_privacy_principles",
            "uk_dpa",
            "argentina_ppl",
        ],
    ),
    // --- US Government & Defense ---
    (
        "us_federal",
        &[
            "nist_csf_2.0",
            "nist_800_53_r5",
            "nist_800_53b_r5_low",
            "nist_800_53b_r5_moderate",
            "nist_800_53b_r5_high",
            "nist_800_53_r5_noc",
            "nist_800_53_r4",
            "nist_800_53_r4_low",
            "nist_800_53_r4_moderate",
            "nist_800_53_r4_high",
            "nist_800_171_r2",
            "nist_800_171a",
            "nist_800_171_r3",
            "nist_800_171a_r3",
            "nist_800_172",
            "cjis_5.9.3",
            "irs_1075",
            "dfars_252_204_70xx",
            "far_52_204_21",
            "far_52_204_25",
            "far_52_204_27",
            "itar_part_120",
            "nispom_2020",
            "us_nnpi",
            "nstc_nspm_33",
            "eo_14028",
            "dhs_cisa_ssdaf",
            "dhs_cisa_tic_3.0",
            "us_cisa_cpg_2022",
            "us_c2m2_2.1",
            "us_cert_rmm_1.2",
            "tsa_dhs_1580_82_2022",
            "ssa_eiesr_8.0",
            "fda_21_cfr_part_11",
            "hhs_45_cfr_155_260",
        ],
    ),
    (
        "fedramp",
        &[
            "fedramp_r4",
            "fedramp_r4_low",
            "fedramp_r4_moderate",
            "fedramp_r4_high",
            "fedramp_r4_lisaas",
            "fedramp_r5",
            "fedramp_r5_low",
            "fedramp_r5_moderate",
            "fedramp_r5_high",
            "fedramp_r5_lisaas",
        ],
    ),
    (
        "govramp",
        &[
            "govramp_core",
            "govramp_low",
            "govramp_low_plus",
            "govramp_moderate",
            "govramp_high",
        ],
    ),
    (
        "cmmc",
        &[
            "cmmc_2.0_level_1",
            "cmmc_2.0_level_1_aos",
            "cmmc_2.0_level_2",
            "cmmc_2.0_level_3",
        ],
    ),
    (
        "zero_trust",
        &[
            "nist_800_207",
            "dod_zt_roadmap",
            "dod_ztra_2.0",
            "dhs_ztcf",
        ],
    ),
    // --- US State Laws ---
    (
        "us_state_laws",
        &[
            "us_ca_ccpa_2025",
            "us_ca_sb327",
            "us_ca_sb1386",
            "nydfs_500_2023",
            "us_ny_shield",
            "us_co_cpa",
            "us_va_cdpa_2025",
            "us_or_cpa",
            "us_or_646a",
            "us_tn_tipa",
            "us_tx_cdpa",
            "us_tx_dir_2.0",
            "us_tx_bc521",
            "us_tx_sb820",
            "us_tx_sb2610",
            "tx_ramp_level_1",
            "tx_ramp_level_2",
            "us_ma_201_cmr_17",
            "us_il_bipa",
            "us_il_ipa",
            "us_il_pipa",
            "us_nv_noge_reg_5",
            "us_nv_sb220",
            "us_ak_pipa",
            "us_vt_act_171",
        ],
    ),
    // --- Financial Services ---
    (
        "financial",
        &[
            "soc_2_tsc",
            "pci_dss_4.0.1",
            "pci_dss_4.0.1_saq_a",
            "pci_dss_4.0.1_saq_a_ep",
            "pci_dss_4.0.1_saq_b",
            "pci_dss_4.0.1_saq_b_ip",
            "pci_dss_4.0.1_saq_c",
            "pci_dss_4.0.1_saq_c_vt",
            "pci_dss_4.0.1_saq_d_merchant",
            "pci_dss_4.0.1_saq_d_sp",
            "pci_dss_4.0.1_saq_p2pe",
            "sox",
            "glba_cfr_314_2023",
            "ffiec",
            "us_finra",
            "sec_cybersecurity_rule",
            "us_facta",
            "ftc_act",
            "naic_mdl_668",
            "fca_crm",
            "dora",
            "psd2",
            "eu_eba_gl_2019_04",
            "swift_cscf_2023",
            "shared_assessments_sig_2025",
            "singapore_mas_trm_2021",
            "saudi_sama_csf_1.0",
            "canada_osfi_b13",
            "australia_cps_230",
            "australia_cps_234",
            "india_sebi_cscrf",
            "germany_bait",
        ],
    ),
    // --- Healthcare ---
    (
        "healthcare",
        &[
            "hipaa_security_rule",
            "hipaa_admin_2013",
            "hipaa_hicp_small",
            "hipaa_hicp_medium",
            "hipaa_hicp_large",
            "cms_mars_e_2.0",
            "hhs_45_cfr_155_260",
            "fda_21_cfr_part_11",
            "iec_tr_60601_4_5_2021",
        ],
    ),
    // --- Industrial / OT / Critical Infrastructure ---
    (
        "industrial_ot",
        &[
            "iec_62443_4_2_2019",
            "nerc_cip_2024",
            "nist_800_82_r3_low",
            "nist_800_82_r3_moderate",
            "nist_800_82_r3_high",
            "imo_maritime_cyber",
            "tsa_dhs_1580_82_2022",
        ],
    ),
    // --- Automotive ---
    (
        "automotive",
        &[
            "iso_sae_21434_2021",
            "tisax_isa_6",
            "un_r155",
            "un_ece_wp29",
            "ul_2900_1_2017",
        ],
    ),
    // --- Supply Chain ---
    (
        "supply_chain",
        &[
            "nist_800_161_r1",
            "nist_800_161_r1_baseline",
            "nist_800_161_r1_flowdown",
            "nist_800_161_r1_level1",
            "nist_800_161_r1_level2",
            "nist_800_161_r1_level3",
            "nist_800_218",
            "dfars_252_204_70xx",
        ],
    ),
    // --- Threat Intelligence & AppSec ---
    (
        "threat_intel_appsec",
        &[
            "mitre_attack_10",
            "owasp_top_10_2021",
            "sparta",
        ],
    ),
    // --- UK ---
    (
        "uk_cybersecurity",
        &[
            "uk_caf_4.0",
            "uk_cyber_essentials",
            "uk_dpa",
            "uk_defstan_05_138",
            "uk_cap_1850",
            "fca_crm",
        ],
    ),
    // --- EU Regulations ---
    (
        "eu_regulations",
        &[
            "gdpr",
            "dora",
            "nis2",
            "nis2_annex",
            "psd2",
            "eu_ai_act",
            "eu_cyber_resilience_act",
            "eu_cra_annexes",
            "eu_eba_gl_2019_04",
            "enisa_2.0",
        ],
    ),
    // --- Europe National ---
    (
        "europe_national",
        &[
            "uk_caf_4.0",
            "uk_cyber_essentials",
            "uk_dpa",
            "uk_defstan_05_138",
            "uk_cap_1850",
            "germany",
            "germany_bait",
            "germany_c5_2020",
            "bsi_200_1",
            "austria",
            "belgium",
            "ireland",
            "italy",
            "greece",
            "hungary",
            "netherlands",
            "norway",
            "poland",
            "sweden",
            "spain_boe_a_2022_7191",
            "spain_1720_2007",
            "spain_311_2022",
            "spain_ccn_stic_825",
            "switzerland",
            "turkey",
            "russia",
            "serbia_87_2018",
            "fca_crm",
        ],
    ),
    // --- Middle East & Africa ---
    (
        "middle_east_africa",
        &[
            "israel",
            "israel_cdmo_1.0",
            "saudi_sama_csf_1.0",
            "saudi_cscc_1_2019",
            "saudi_ecc_1_2018",
            "saudi_otcc_1_2022",
            "saudi_cgiot_1_2024",
            "saudi_pdpl",
            "saudi_sacs_002",
            "uae_niaf",
            "qatar_pdppl",
            "south_africa",
            "kenya_dpa_2019",
            "nigeria_dpr_2019",
        ],
    ),
    // --- Asia-Pacific ---
    (
        "asia_pacific",
        &[
            "australia_essential_8",
            "australia_ism_2024",
            "australia_privacy_act",
            "australia_privacy_principles",
            "australia_iot_cop",
            "australia_cps_230",
            "australia_cps_234",
            "singapore",
            "singapore_cyber_hygiene",
            "singapore_mas_trm_2021",
            "japan_appi",
            "japan_ismap",
            "china_cybersecurity_law",
            "china_data_security_law",
            "china_privacy_law",
            "china_dnsip",
            "hong_kong",
            "india_dpdpa_2023",
            "india_itr",
            "india_sebi_cscrf",
            "south_korea",
            "taiwan",
            "malaysia",
            "philippines",
            "nz_hisf_2022",
            "nz_hisf_suppliers_2023",
            "nz_nzism_3.6",
            "nz_privacy_act_2020",
        ],
    ),
    // --- Americas (non-US) ---
    (
        "americas",
        &[
            "canada_pipeda",
            "canada_csag",
            "canada_osfi_b13",
            "canada_itsp_10_171",
            "brazil_lgpd",
            "argentina_ppl",
            "argentina_reg_132_2018",
            "mexico",
            "chile",
            "colombia",
            "peru",
            "costa_rica",
            "uruguay",
            "bahamas",
            "bermuda_bmaccc",
        ],
    ),
    // --- Media & Entertainment ---
    (
        "media_entertainment",
        &[
            "mpa_csp_5.1",
        ],
    ),
];

/// Members of a category, `None` when the category does not exist.
pub fn members(category: &str) -> Option<&'static [&'static str]> {
    FRAMEWORK_CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, keys)| *keys)
}

/// Category names in table order.
pub fn names() -> impl Iterator<Item = &'static str> {
    FRAMEWORK_CATEGORIES.iter().map(|(name, _)| *name)
}

/// Every category a framework key belongs to.
pub fn categories_of(key: &str) -> Vec<&'static str> {
    FRAMEWORK_CATEGORIES
        .iter()
        .filter(|(_, keys)| keys.contains(&key))
        .map(|(name, _)| *name)
        .collect()
}
