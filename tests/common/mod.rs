#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use shopdesk::models::{
    Bay, CoverageTerm, Customer, CustomerAddress, CustomerRef, FindingSeverity, Inspection,
    InspectionFinding, InspectionType, InventoryItem, PartCoverage, PartOrder, PartOrderStatus,
    ServiceLine, ServiceStatus, Vehicle, VehicleSummary, Warranty, WorkOrder, WorkOrderPriority,
    WorkOrderStatus,
};

/// Fixed "current time" every fixture is written against.
pub fn now() -> DateTime<Utc> {
    at(2024, 9, 1, 12, 0)
}

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

fn address(street: &str, city: &str, zip: &str) -> CustomerAddress {
    CustomerAddress {
        street: street.to_string(),
        city: city.to_string(),
        state: "TX".to_string(),
        zip_code: zip.to_string(),
    }
}

fn vehicle(
    id: &str,
    customer_id: &str,
    vin: &str,
    (year, make, model): (i32, &str, &str),
    mileage: u32,
    plate: &str,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        customer_id: customer_id.to_string(),
        vin: vin.to_string(),
        year,
        make: make.to_string(),
        model: model.to_string(),
        trim: None,
        color: None,
        mileage,
        license_plate: Some(plate.to_string()),
        notes: None,
    }
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "CUST-001".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            address: address("123 Main St", "Austin", "78701"),
            vehicles: vec![vehicle(
                "VEH-001",
                "CUST-001",
                "1HGBH41JXMN109186",
                (2020, "Honda", "Civic"),
                45_230,
                "ABC-123",
            )],
            notes: Some("Prefers morning appointments".to_string()),
            total_spent: dec!(1247.50),
            visit_count: 8,
            last_visit: Some(at(2024, 8, 15, 10, 0)),
            created_at: at(2022, 3, 10, 9, 0),
            updated_at: at(2024, 8, 15, 10, 0),
        },
        Customer {
            id: "CUST-002".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Johnson".to_string(),
            email: "sarah.j@email.com".to_string(),
            phone: "(555) 987-6543".to_string(),
            address: address("456 Oak Ave", "Round Rock", "78664"),
            vehicles: vec![
                vehicle(
                    "VEH-002",
                    "CUST-002",
                    "1FTFW1ET5JFC10312",
                    (2018, "Ford", "F-150"),
                    78_900,
                    "XYZ-789",
                ),
                vehicle(
                    "VEH-003",
                    "CUST-002",
                    "5FNYF6H01MB000001",
                    (2021, "Honda", "Pilot"),
                    22_100,
                    "DEF-456",
                ),
            ],
            notes: None,
            total_spent: dec!(2847.75),
            visit_count: 15,
            last_visit: Some(at(2024, 8, 28, 14, 0)),
            created_at: at(2021, 6, 1, 9, 0),
            updated_at: at(2024, 8, 28, 14, 0),
        },
        Customer {
            id: "CUST-003".to_string(),
            first_name: "Mike".to_string(),
            last_name: "Rodriguez".to_string(),
            email: "m.rodriguez@email.com".to_string(),
            phone: "(555) 456-7890".to_string(),
            address: address("789 Pine Rd", "Austin", "78702"),
            vehicles: vec![vehicle(
                "VEH-004",
                "CUST-003",
                "4T1B11HK5KU123456",
                (2019, "Toyota", "Camry"),
                52_340,
                "GHI-321",
            )],
            notes: None,
            total_spent: dec!(456.25),
            visit_count: 3,
            last_visit: Some(at(2024, 8, 1, 14, 0)),
            created_at: at(2024, 1, 20, 9, 0),
            updated_at: at(2024, 8, 1, 14, 0),
        },
    ]
}

fn service(name: &str, hours: Decimal) -> ServiceLine {
    ServiceLine {
        name: name.to_string(),
        description: None,
        labor_hours: hours,
        labor_rate: dec!(125),
        status: ServiceStatus::Pending,
        technician_id: Some("TECH-01".to_string()),
        warranty: Some(CoverageTerm::months(12).unwrap()),
    }
}

struct OrderSpec<'a> {
    id: &'a str,
    customer: (&'a str, &'a str),
    vehicle: (&'a str, i32, &'a str, &'a str),
    status: WorkOrderStatus,
    priority: WorkOrderPriority,
    estimated_cost: Decimal,
    actual_cost: Option<Decimal>,
    estimated_completion: DateTime<Utc>,
    bay_id: Option<&'a str>,
}

fn work_order(spec: OrderSpec<'_>) -> WorkOrder {
    let (vehicle_id, year, make, model) = spec.vehicle;
    WorkOrder {
        id: spec.id.to_string(),
        customer: CustomerRef {
            id: spec.customer.0.to_string(),
            name: spec.customer.1.to_string(),
            phone: None,
        },
        vehicle_id: vehicle_id.to_string(),
        vehicle: VehicleSummary {
            year,
            make: make.to_string(),
            model: model.to_string(),
        },
        technician: Some("Carlos Mendez".to_string()),
        bay_id: spec.bay_id.map(str::to_string),
        status: spec.status,
        priority: spec.priority,
        description: String::new(),
        customer_concerns: Vec::new(),
        estimated_cost: spec.estimated_cost,
        actual_cost: spec.actual_cost,
        estimated_completion: spec.estimated_completion,
        actual_completion: None,
        services: Vec::new(),
        parts: Vec::new(),
        inspections: Vec::new(),
        photo_count: 0,
        labor_warranty: None,
        created_at: at(2024, 8, 1, 8, 0),
        updated_at: at(2024, 8, 1, 8, 0),
    }
}

pub fn work_orders() -> Vec<WorkOrder> {
    let mut brakes = work_order(OrderSpec {
        id: "WO-2024-001",
        customer: ("CUST-001", "John Smith"),
        vehicle: ("VEH-001", 2020, "Honda", "Civic"),
        status: WorkOrderStatus::InProgress,
        priority: WorkOrderPriority::High,
        estimated_cost: dec!(450.00),
        actual_cost: None,
        estimated_completion: at(2024, 9, 1, 17, 0),
        bay_id: Some("BAY-1"),
    });
    brakes.services = vec![
        service("Brake Pad Replacement", dec!(1.5)),
        service("Rotor Resurfacing", dec!(0.5)),
    ];
    brakes.parts = vec![part_orders().remove(0)];

    vec![
        brakes,
        work_order(OrderSpec {
            id: "WO-2024-002",
            customer: ("CUST-002", "Sarah Johnson"),
            vehicle: ("VEH-002", 2018, "Ford", "F-150"),
            status: WorkOrderStatus::AwaitingParts,
            priority: WorkOrderPriority::Medium,
            estimated_cost: dec!(890.00),
            actual_cost: None,
            estimated_completion: at(2024, 8, 30, 17, 0),
            bay_id: Some("BAY-2"),
        }),
        work_order(OrderSpec {
            id: "WO-2024-003",
            customer: ("CUST-003", "Mike Rodriguez"),
            vehicle: ("VEH-004", 2019, "Toyota", "Camry"),
            status: WorkOrderStatus::Completed,
            priority: WorkOrderPriority::Low,
            estimated_cost: dec!(180.00),
            actual_cost: Some(dec!(189.99)),
            estimated_completion: at(2024, 8, 1, 16, 0),
            bay_id: None,
        }),
        work_order(OrderSpec {
            id: "WO-2024-004",
            customer: ("CUST-004", "David Wilson"),
            vehicle: ("VEH-005", 2017, "BMW", "320i"),
            status: WorkOrderStatus::Delivered,
            priority: WorkOrderPriority::Medium,
            estimated_cost: dec!(300.00),
            actual_cost: Some(dec!(320.00)),
            estimated_completion: at(2024, 6, 19, 15, 0),
            bay_id: None,
        }),
        work_order(OrderSpec {
            id: "WO-2024-005",
            customer: ("CUST-002", "Sarah Johnson"),
            vehicle: ("VEH-003", 2021, "Honda", "Pilot"),
            status: WorkOrderStatus::Cancelled,
            priority: WorkOrderPriority::Low,
            estimated_cost: dec!(150.00),
            actual_cost: None,
            estimated_completion: at(2024, 8, 20, 12, 0),
            bay_id: None,
        }),
    ]
}

fn warranty(
    id: &str,
    customer_name: &str,
    vehicle_description: &str,
    service_date: DateTime<Utc>,
    months: i64,
    total_amount: Decimal,
) -> Warranty {
    Warranty {
        id: id.to_string(),
        work_order_id: id.replace("WTY", "WO"),
        customer_name: customer_name.to_string(),
        vehicle_description: vehicle_description.to_string(),
        services: Vec::new(),
        service_date,
        labor_coverage: CoverageTerm::months(months).unwrap(),
        parts_coverage: Vec::new(),
        total_amount,
        terms: vec!["Covers defects in workmanship".to_string()],
        exclusions: vec!["Normal wear and tear".to_string()],
        claim_count: 0,
    }
}

/// One active, two expiring and one expired record as of [`now`].
pub fn warranties() -> Vec<Warranty> {
    let mut oil = warranty(
        "WTY-2024-001",
        "Mike Rodriguez",
        "2019 Toyota Camry",
        at(2024, 8, 1, 14, 0),
        12,
        dec!(189.99),
    );
    oil.services = vec!["Oil Change".to_string(), "Multi-Point Inspection".to_string()];
    oil.parts_coverage = vec![PartCoverage {
        part_name: "Engine Oil Filter".to_string(),
        term: CoverageTerm::months(3).unwrap(),
        description: None,
    }];

    let mut brakes = warranty(
        "WTY-2024-002",
        "John Smith",
        "2020 Honda Civic",
        at(2024, 3, 15, 10, 30),
        6,
        dec!(425.00),
    );
    brakes.services = vec![
        "Brake Pad Replacement".to_string(),
        "Rotor Resurfacing".to_string(),
    ];
    brakes.parts_coverage = vec![
        PartCoverage {
            part_name: "Ceramic Brake Pads".to_string(),
            term: CoverageTerm::months(24).unwrap(),
            description: Some("Manufacturer defects".to_string()),
        },
        PartCoverage {
            part_name: "Brake Rotors".to_string(),
            term: CoverageTerm::months(6).unwrap(),
            description: None,
        },
    ];
    brakes.claim_count = 1;

    let mut transmission = warranty(
        "WTY-2024-003",
        "Sarah Johnson",
        "2018 Ford F-150",
        at(2023, 6, 10, 9, 0),
        12,
        dec!(275.00),
    );
    transmission.services = vec!["Transmission Service".to_string()];

    let mut ac = warranty(
        "WTY-2024-004",
        "David Wilson",
        "2017 BMW 320i",
        at(2024, 6, 19, 15, 0),
        3,
        dec!(320.00),
    );
    ac.services = vec!["A/C Recharge".to_string()];

    vec![oil, brakes, transmission, ac]
}

fn part_order(
    id: &str,
    work_order_id: &str,
    (part_number, part_name): (&str, &str),
    quantity: u32,
    unit_cost: Decimal,
    status: PartOrderStatus,
    customer_name: &str,
    vehicle_description: &str,
) -> PartOrder {
    PartOrder {
        id: id.to_string(),
        work_order_id: work_order_id.to_string(),
        part_number: part_number.to_string(),
        part_name: part_name.to_string(),
        brand: "OEM".to_string(),
        quantity,
        unit_cost,
        supplier: "AutoZone Commercial".to_string(),
        status,
        customer_name: customer_name.to_string(),
        vehicle_description: vehicle_description.to_string(),
        estimated_delivery: Some(at(2024, 9, 3, 12, 0)),
        actual_delivery: None,
        warranty: None,
    }
}

pub fn part_orders() -> Vec<PartOrder> {
    vec![
        part_order(
            "PO-001",
            "WO-2024-001",
            ("BP-4521", "Ceramic Brake Pads"),
            1,
            dec!(89.99),
            PartOrderStatus::Ordered,
            "John Smith",
            "2020 Honda Civic",
        ),
        part_order(
            "PO-002",
            "WO-2024-002",
            ("FP-8830", "Fuel Pump Assembly"),
            1,
            dec!(345.50),
            PartOrderStatus::Pending,
            "Sarah Johnson",
            "2018 Ford F-150",
        ),
        part_order(
            "PO-003",
            "WO-2024-001",
            ("BR-1177", "Brake Rotor"),
            2,
            dec!(64.25),
            PartOrderStatus::Received,
            "John Smith",
            "2020 Honda Civic",
        ),
        part_order(
            "PO-004",
            "WO-2024-003",
            ("OF-2210", "Oil Filter"),
            1,
            dec!(12.99),
            PartOrderStatus::Installed,
            "Mike Rodriguez",
            "2019 Toyota Camry",
        ),
    ]
}

pub fn inventory() -> Vec<InventoryItem> {
    let item = |part_number: &str, name: &str, current_stock, reorder_level, unit_cost| {
        InventoryItem {
            part_number: part_number.to_string(),
            name: name.to_string(),
            category: None,
            current_stock,
            reorder_level,
            unit_cost,
        }
    };
    vec![
        item("OF-2210", "Oil Filter", 4, 5, dec!(12.99)),
        item("BP-4521", "Ceramic Brake Pads", 10, 4, dec!(89.99)),
        item("WB-0022", "Wiper Blade 22in", 3, 3, dec!(18.50)),
    ]
}

pub fn bays() -> Vec<Bay> {
    let bay = |number: u32, work_order: Option<&str>| Bay {
        id: format!("BAY-{}", number),
        number,
        name: format!("Bay {}", number),
        current_work_order: work_order.map(str::to_string),
        equipment: vec!["Lift".to_string()],
        specializations: Vec::new(),
    };
    vec![
        bay(1, Some("WO-2024-001")),
        bay(2, Some("WO-2024-002")),
        bay(3, None),
    ]
}

fn inspection(
    id: &str,
    work_order_id: &str,
    customer_name: &str,
    vehicle_description: &str,
    inspection_type: InspectionType,
) -> Inspection {
    Inspection {
        id: id.to_string(),
        work_order_id: work_order_id.to_string(),
        customer_name: customer_name.to_string(),
        vehicle_description: vehicle_description.to_string(),
        inspection_type,
        technician: "Carlos Mendez".to_string(),
        findings: Vec::new(),
        recommendations: Vec::new(),
        photo_count: 0,
        video_count: 0,
        completed_at: None,
    }
}

pub fn inspections() -> Vec<Inspection> {
    let mut initial = inspection(
        "INS-2024-001",
        "WO-2024-001",
        "John Smith",
        "2020 Honda Civic",
        InspectionType::Initial,
    );
    initial.findings = vec![InspectionFinding {
        category: "Brakes".to_string(),
        severity: FindingSeverity::High,
        description: "Front pads at 2mm".to_string(),
        recommendation: "Replace front pads and resurface rotors".to_string(),
        estimated_cost: Some(dec!(450.00)),
        photo_count: 3,
    }];
    initial.photo_count = 8;
    initial.completed_at = Some(at(2024, 8, 30, 10, 0));

    vec![
        initial,
        inspection(
            "INS-2024-002",
            "WO-2024-002",
            "Sarah Johnson",
            "2018 Ford F-150",
            InspectionType::Diagnostic,
        ),
        inspection(
            "INS-2024-003",
            "WO-2024-003",
            "Mike Rodriguez",
            "2019 Toyota Camry",
            InspectionType::Final,
        ),
        inspection(
            "INS-2024-004",
            "WO-2024-005",
            "Sarah Johnson",
            "2021 Honda Pilot",
            InspectionType::Initial,
        ),
    ]
}
