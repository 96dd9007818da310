use bitunpack::batch::{BatchDeflater, BatchInflater};
use bitunpack::{TransformOptions, Width};
use std::time::Instant;

fn main() {
    let data1 = b"Hello world. This is the first string.".repeat(100);
    let data2 = b"Another string for batch processing.".repeat(100);
    let data3 = b"Short string.".to_vec();
    let data4 = vec![b'A'; 10000];

    let inputs = vec![
        data1.as_slice(),
        data2.as_slice(),
        data3.as_slice(),
        data4.as_slice(),
    ];

    println!("Batch inflating {} items...", inputs.len());
    let start = Instant::now();

    let inflater = match BatchInflater::new(TransformOptions::new(Width::W4, Width::W16)) {
        Ok(inflater) => inflater,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            return;
        }
    };
    let wide_data = inflater.inflate_batch(&inputs);
    println!("Inflate took: {:?}", start.elapsed());

    for (i, data) in wide_data.iter().enumerate() {
        println!(
            "Item {}: Packed size: {}, Expanded size: {}",
            i,
            inputs[i].len(),
            data.len()
        );
    }

    println!("Batch deflating...");
    let deflater = match BatchDeflater::new(TransformOptions::new(Width::W16, Width::W4)) {
        Ok(deflater) => deflater,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            return;
        }
    };
    let wide_refs: Vec<&[u8]> = wide_data.iter().map(|v| v.as_slice()).collect();
    let results = deflater.deflate_batch(&wide_refs);

    for (i, result) in results.iter().enumerate() {
        match result {
            Ok(data) => {
                let kept = inputs[i].len() / 4 * 4;
                assert_eq!(data.as_slice(), &inputs[i][..kept]);
                println!("Item {}: Deflate successful ({} bytes).", i, data.len());
            }
            Err(e) => println!("Item {}: Deflate failed: {}", i, e),
        }
    }
}
